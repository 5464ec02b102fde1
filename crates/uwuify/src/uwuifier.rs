//! The uwuification pipeline.
//!
//! Each pass splits its input on single spaces and reseeds a fresh
//! [`Seed`] from every token's own text. A token's fate therefore depends
//! only on its text and the configuration, never on its position or
//! neighbours, and repeated calls always agree.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::classify::{capital_ratio, is_break, is_handle, is_uri};
use crate::error::ModifierError;
use crate::lexicon::Lexicon;
use crate::modifiers::{Modifiers, SpacesModifier};
use crate::seed::Seed;

/// Characters that end a sentence for capitalisation purposes.
const SENTENCE_ENDINGS: [char; 4] = ['.', '!', '?', '-'];

/// A capital is kept when more than this share of the letters are capitals.
const SHOUTING_RATIO: f64 = 0.5;

/// Largest number of stutter prefixes.
const MAX_STUTTERS: usize = 2;

/// Transforms text into its playful variant.
///
/// The lexicon is shared behind an [`Arc`] and never mutated, so clones are
/// cheap and a single instance can serve concurrent callers.
///
/// # Example
///
/// ```
/// use uwuify::Uwuifier;
///
/// let uwuifier = Uwuifier::new().with_words(1.0).expect("valid modifier");
/// assert_eq!(uwuifier.uwuify_words("I love you"), "I wuv you");
/// assert_eq!(
///     uwuifier.uwuify_words("see https://example.com/rules @lorelei"),
///     "see https://example.com/rules @lorelei"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Uwuifier {
    modifiers: Modifiers,
    lexicon: Arc<Lexicon>,
}

impl Uwuifier {
    /// Builds an uwuifier with the default modifiers and lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modifiers: Modifiers::default(),
            lexicon: Lexicon::shared_default(),
        }
    }

    /// Replaces the lexicon.
    #[must_use]
    pub fn with_lexicon(self, lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
            ..self
        }
    }

    /// Replaces every modifier at once.
    #[must_use]
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    /// Sets the words modifier, consuming the uwuifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::Words`] if `value` is outside `[0, 1]`.
    pub fn with_words(mut self, value: f64) -> Result<Self, ModifierError> {
        self.set_words_modifier(value)?;
        Ok(self)
    }

    /// Sets the spaces modifier, consuming the uwuifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError`] if a component is negative or the sum is
    /// outside `[0, 1]`.
    pub fn with_spaces(mut self, value: SpacesModifier) -> Result<Self, ModifierError> {
        self.set_spaces_modifier(value)?;
        Ok(self)
    }

    /// Sets the exclamations modifier, consuming the uwuifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::Exclamations`] if `value` is outside `[0, 1]`.
    pub fn with_exclamations(mut self, value: f64) -> Result<Self, ModifierError> {
        self.set_exclamations_modifier(value)?;
        Ok(self)
    }

    /// Returns the active modifiers.
    #[must_use]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns the words modifier.
    #[must_use]
    pub const fn words_modifier(&self) -> f64 {
        self.modifiers.words()
    }

    /// Returns the spaces modifier.
    #[must_use]
    pub const fn spaces_modifier(&self) -> SpacesModifier {
        self.modifiers.spaces()
    }

    /// Returns the exclamations modifier.
    #[must_use]
    pub const fn exclamations_modifier(&self) -> f64 {
        self.modifiers.exclamations()
    }

    /// Returns the lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Sets the words modifier, keeping the old value on error.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::Words`] if `value` is outside `[0, 1]`.
    pub fn set_words_modifier(&mut self, value: f64) -> Result<(), ModifierError> {
        self.modifiers.set_words(value).inspect_err(log_rejection)
    }

    /// Sets the spaces modifier, keeping the old value on error.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError`] if a component is negative or the sum is
    /// outside `[0, 1]`.
    pub fn set_spaces_modifier(&mut self, value: SpacesModifier) -> Result<(), ModifierError> {
        self.modifiers.set_spaces(value).inspect_err(log_rejection)
    }

    /// Sets the exclamations modifier, keeping the old value on error.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::Exclamations`] if `value` is outside `[0, 1]`.
    pub fn set_exclamations_modifier(&mut self, value: f64) -> Result<(), ModifierError> {
        self.modifiers
            .set_exclamations(value)
            .inspect_err(log_rejection)
    }

    /// Applies the phoneme rules to every word that is not a handle or URI.
    ///
    /// Each rule is gated by its own draw against the words modifier. The
    /// draw happens even when the rule is skipped, so later rules always see
    /// the same position in the stream.
    #[must_use]
    pub fn uwuify_words(&self, sentence: &str) -> String {
        join(sentence.split(' ').map(|word| self.uwuify_word(word)))
    }

    /// Appends faces or actions to words, or stutters their first letter.
    ///
    /// A single draw per word selects the band. After a face or action is
    /// appended, a sentence-initial capital is lowered unless the word reads
    /// as an acronym.
    #[must_use]
    pub fn uwuify_spaces(&self, sentence: &str) -> String {
        let words: Vec<&str> = sentence.split(' ').collect();
        let bands = Bands::from(self.modifiers.spaces());

        join(words.iter().enumerate().map(|(index, word)| {
            let previous = index.checked_sub(1).and_then(|i| words.get(i)).copied();
            self.space_word(word, previous, bands)
        }))
    }

    /// Replaces trailing runs of `?` and `!` with an exclamation variant.
    #[must_use]
    pub fn uwuify_exclamations(&self, sentence: &str) -> String {
        join(sentence.split(' ').map(|word| self.exclaim_word(word)))
    }

    /// Runs the words, exclamations, and spaces passes, in that order.
    ///
    /// # Example
    ///
    /// ```
    /// use uwuify::Uwuifier;
    ///
    /// let uwuifier = Uwuifier::new();
    /// let first = uwuifier.uwuify_sentence("I love you so much, my dear friend!!");
    /// let second = uwuifier.uwuify_sentence("I love you so much, my dear friend!!");
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn uwuify_sentence(&self, sentence: &str) -> String {
        let words = self.uwuify_words(sentence);
        let exclaimed = self.uwuify_exclamations(&words);
        let spaced = self.uwuify_spaces(&exclaimed);
        debug!(
            tokens = sentence.split(' ').count(),
            input_len = sentence.len(),
            output_len = spaced.len(),
            "sentence uwuified"
        );
        spaced
    }

    fn uwuify_word<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if is_handle(word) || is_uri(word) {
            return Cow::Borrowed(word);
        }

        let mut seed = Seed::new(word);
        let threshold = self.modifiers.words();
        let mut current = Cow::Borrowed(word);
        for rule in self.lexicon.rules() {
            if seed.next_unit() > threshold {
                continue;
            }
            let replaced = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(replaced) => replaced,
            };
            current = Cow::Owned(replaced);
        }
        current
    }

    fn space_word<'a>(&self, word: &'a str, previous: Option<&str>, bands: Bands) -> Cow<'a, str> {
        let Some(first) = word.chars().next() else {
            return Cow::Borrowed(word);
        };

        let mut seed = Seed::new(word);
        let roll = seed.next_unit();
        let blank = is_break(word);
        let faces = self.lexicon.faces();
        let actions = self.lexicon.actions();

        let suffixes = if blank {
            None
        } else if roll <= bands.face && !faces.is_empty() {
            Some(faces)
        } else if roll <= bands.action && !actions.is_empty() {
            Some(actions)
        } else {
            None
        };

        if let Some(list) = suffixes {
            if let Some(suffix) = seed.index_for(list.len()).and_then(|i| list.get(i)) {
                let decorated = format!("{word} {suffix}");
                return Cow::Owned(lower_leading_capital(decorated, first, previous));
            }
            return Cow::Borrowed(word);
        }

        if !blank && roll <= bands.stutter && !is_uri(word) {
            // index_for(n + 1) draws a count in 0..=n.
            let count = seed.index_for(MAX_STUTTERS + 1).unwrap_or(0);
            if count > 0 {
                let mut stuttered = format!("{first}-").repeat(count);
                stuttered.push_str(word);
                return Cow::Owned(stuttered);
            }
        }

        Cow::Borrowed(word)
    }

    fn exclaim_word<'a>(&self, word: &'a str) -> Cow<'a, str> {
        let mut seed = Seed::new(word);
        let roll = seed.next_unit();
        let stem = word.trim_end_matches(['?', '!']);

        if stem.len() == word.len() || roll > self.modifiers.exclamations() || is_break(word) {
            return Cow::Borrowed(word);
        }

        let exclamations = self.lexicon.exclamations();
        seed.index_for(exclamations.len())
            .and_then(|i| exclamations.get(i))
            .map_or(Cow::Borrowed(word), |exclamation| {
                Cow::Owned(format!("{stem}{exclamation}"))
            })
    }
}

impl Default for Uwuifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Cumulative upper bounds of the spacing bands.
#[derive(Debug, Clone, Copy)]
struct Bands {
    face: f64,
    action: f64,
    stutter: f64,
}

impl From<SpacesModifier> for Bands {
    fn from(spaces: SpacesModifier) -> Self {
        let (face, action, stutter) = spaces.thresholds();
        Self {
            face,
            action,
            stutter,
        }
    }
}

/// Lowers the first character of a decorated word when it only carries
/// sentence-initial capitalisation.
fn lower_leading_capital(decorated: String, first: char, previous: Option<&str>) -> String {
    let is_capital = first.to_uppercase().eq(std::iter::once(first));
    if !is_capital || capital_ratio(&decorated) > SHOUTING_RATIO {
        return decorated;
    }

    let starts_sentence = previous.is_none_or(|word| word.ends_with(SENTENCE_ENDINGS));
    if !starts_sentence {
        return decorated;
    }

    first
        .to_lowercase()
        .chain(decorated.chars().skip(1))
        .collect()
}

fn join<'a>(words: impl Iterator<Item = Cow<'a, str>>) -> String {
    words.collect::<Vec<_>>().join(" ")
}

fn log_rejection(err: &ModifierError) {
    warn!(error = %err, "modifier rejected; keeping previous value");
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn eager_words() -> Uwuifier {
        Uwuifier::new().with_words(1.0).expect("valid modifier")
    }

    fn spaces_only(faces: f64, actions: f64, stutters: f64) -> Uwuifier {
        Uwuifier::new()
            .with_spaces(SpacesModifier::new(faces, actions, stutters))
            .expect("valid modifier")
    }

    #[rstest]
    #[case("Stabbed", "Stabbed")]
    #[case("Tonight", "Tonyight")]
    #[case("Through", "Thwough")]
    #[case("Struggling", "Stwuggwing")]
    #[case("Netherlands", "Nyethewwands")]
    #[case("Grandpa", "Gwandpa")]
    #[case("love", "wuv")]
    #[case("move", "muv")]
    #[case("remove", "wemuv")]
    #[case("NANO", "NYANYO")]
    fn words_pass_applies_every_rule_at_full_strength(
        eager_words: Uwuifier,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(eager_words.uwuify_words(input), expected);
    }

    #[rstest]
    #[case("Struggling", "Struggling")]
    #[case("Netherlands", "Nyethewwands")]
    #[case(
        "This is a test sentence with lots of r and l letters",
        "This is a test sentence with lots of w and l wettews"
    )]
    fn words_pass_gates_rules_by_draw(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Uwuifier::new().uwuify_words(input), expected);
    }

    #[test]
    fn words_pass_draws_for_skipped_rules() {
        let uwuifier = Uwuifier::new().with_words(0.5).expect("valid modifier");
        assert_eq!(
            uwuifier.uwuify_words("This is a test sentence with lots of r and l letters"),
            "This is a test sentence with lots of r and l wettews"
        );
    }

    #[rstest]
    #[case("@lorelei")]
    #[case("https://www.example.com/rules")]
    #[case("mailto:lorelei@example.com")]
    fn words_pass_leaves_protected_tokens(eager_words: Uwuifier, #[case] token: &str) {
        assert_eq!(eager_words.uwuify_words(token), token);
    }

    #[test]
    fn words_pass_keeps_empty_tokens() {
        assert_eq!(Uwuifier::new().uwuify_words("  hi  "), "  hi  ");
    }

    #[rstest]
    #[case("Fish", "fish UwU")]
    #[case("word34", "word34 *screeches*")]
    #[case("night", "n-n-night")]
    #[case("Tree", "T-Tree")]
    #[case("apple", "apple")]
    #[case("hello", "hello")]
    fn spaces_pass_matches_reference_at_defaults(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Uwuifier::new().uwuify_spaces(input), expected);
    }

    #[test]
    fn spaces_pass_lowers_sentence_initial_capitals_only() {
        let uwuifier = spaces_only(1.0, 0.0, 0.0);
        assert_eq!(
            uwuifier.uwuify_spaces("Hello world. Bye Bob"),
            "hello UwU world. x3 bye ÚwÚ Bob ^-^"
        );
    }

    #[test]
    fn spaces_pass_keeps_shouted_capitals() {
        let uwuifier = spaces_only(1.0, 0.0, 0.0);
        assert_eq!(uwuifier.uwuify_spaces("HELLO there"), "HELLO >w< there ^w^");
    }

    #[test]
    fn spaces_pass_appends_actions() {
        let uwuifier = spaces_only(0.0, 1.0, 0.0);
        assert_eq!(uwuifier.uwuify_spaces("Hello"), "hello *sweats*");
    }

    #[test]
    fn spaces_pass_skips_empty_tokens() {
        let uwuifier = spaces_only(1.0, 0.0, 0.0);
        assert_eq!(uwuifier.uwuify_spaces("hi  there"), "hi >w<  there ^w^");
    }

    #[test]
    fn spaces_pass_never_stutters_uris() {
        let uwuifier = spaces_only(0.0, 0.0, 1.0);
        assert_eq!(
            uwuifier.uwuify_spaces("https://example.com cat"),
            "https://example.com c-cat"
        );
        assert_eq!(uwuifier.uwuify_spaces("kitten cat"), "k-kitten c-cat");
    }

    #[test]
    fn spaces_pass_leaves_whitespace_tokens() {
        let uwuifier = spaces_only(1.0, 0.0, 0.0);
        assert_eq!(uwuifier.uwuify_spaces("\t"), "\t");
    }

    #[rstest]
    #[case("Wow!!", "Wow!!11")]
    #[case("What?", "What?!?1")]
    #[case("Really?!", "Really!!11")]
    #[case("hey?!?!", "hey!!11")]
    #[case("Wow!! ok", "Wow!!11 ok")]
    #[case("no punctuation here", "no punctuation here")]
    #[case("mid!word", "mid!word")]
    fn exclamations_pass_matches_reference(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Uwuifier::new().uwuify_exclamations(input), expected);
    }

    #[test]
    fn exclamations_pass_respects_modifier() {
        let uwuifier = Uwuifier::new().with_exclamations(0.0).expect("valid modifier");
        assert_eq!(uwuifier.uwuify_exclamations("Wow!!"), "Wow!!");
    }

    #[rstest]
    #[case("Hello world!", "Hewwo w-w-wowwd!!11")]
    #[case("This is a test sentence.", "This is a test sentence.")]
    #[case(
        "Random text with multiple words and punctuation!",
        "Wandom text with muwtipwe wowds and punctuation?!?1"
    )]
    #[case(
        "I love you so much, my dear friend!!",
        "I luv UwU you so much, my deaw fwiend?!?!"
    )]
    #[case(
        "Check https://example.com/path?q=1 now @friend really",
        "Check https://example.com/path?q=1 n-nyow @friend weawwy ^w^"
    )]
    fn sentence_matches_reference(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Uwuifier::new().uwuify_sentence(input), expected);
    }

    #[test]
    fn rejected_setter_keeps_previous_value() {
        let mut uwuifier = Uwuifier::new();
        assert_eq!(
            uwuifier.set_words_modifier(1.5),
            Err(ModifierError::Words { value: 1.5 })
        );
        assert_eq!(
            uwuifier.set_spaces_modifier(SpacesModifier::new(0.6, 0.6, 0.0)),
            Err(ModifierError::Spaces { sum: 1.2 })
        );
        assert_eq!(uwuifier.modifiers(), Modifiers::default());
    }

    #[test]
    fn lower_leading_capital_respects_previous_word() {
        assert_eq!(
            lower_leading_capital("Bob x3".to_owned(), 'B', Some("Hello")),
            "Bob x3"
        );
        assert_eq!(
            lower_leading_capital("Bob x3".to_owned(), 'B', Some("well-")),
            "bob x3"
        );
        assert_eq!(
            lower_leading_capital("Bob x3".to_owned(), 'B', Some("")),
            "Bob x3"
        );
        assert_eq!(lower_leading_capital("Bob x3".to_owned(), 'B', None), "bob x3");
    }

    #[test]
    fn uwuifier_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Uwuifier>();
    }
}
