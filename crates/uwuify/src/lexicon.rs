//! Lexicons consulted by the passes.
//!
//! A [`Lexicon`] bundles the decorative strings (faces, actions, and
//! exclamation variants) with the ordered phoneme substitution rules. Rule
//! order matters: each rule runs over the output of the previous one.
//!
//! Lexicons can be loaded from JSON. Every key is optional and falls back
//! to the built-in list:
//!
//! ```json
//! {
//!     "faces": ["OwO", "UwU"],
//!     "actions": ["*blushes*"],
//!     "exclamations": ["!?", "?!!"],
//!     "rules": [{"pattern": "[rl]", "replacement": "w"}]
//! }
//! ```

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use camino::Utf8Path;
use cap_std::fs::Dir;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::error::LexiconError;

const DEFAULT_FACES: &[&str] = &[
    "(・`ω´・)",
    ";;w;;",
    "OwO",
    "UwU",
    ">w<",
    "^w^",
    "ÚwÚ",
    "^-^",
    ":3",
    "x3",
];

const DEFAULT_ACTIONS: &[&str] = &[
    "*blushes*",
    "*whispers to self*",
    "*cries*",
    "*screams*",
    "*sweats*",
    "*twerks*",
    "*runs away*",
    "*screeches*",
    "*walks away*",
    "*sees bulge*",
    "*looks at you*",
    "*notices buldge*",
    "*starts twerking*",
    "*huggles tightly*",
    "*boops your nose*",
];

const DEFAULT_EXCLAMATIONS: &[&str] = &["!?", "?!!", "?!?1", "!!11", "?!?!"];

/// Applied top to bottom; each rule sees the previous rule's output.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("ove", "uv"),
    ("[rl]", "w"),
    ("[RL]", "W"),
    ("n([aeiou])", "ny${1}"),
    ("N([aeiou])", "Ny${1}"),
    ("N([AEIOU])", "NY${1}"),
];

static DEFAULT_LEXICON: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    #[expect(
        clippy::expect_used,
        reason = "built-in patterns are constants exercised by the unit tests"
    )]
    let rules = DEFAULT_RULES
        .iter()
        .map(|(pattern, replacement)| {
            PhonemeRule::new(pattern, *replacement).expect("built-in phoneme rule compiles")
        })
        .collect();

    Arc::new(Lexicon {
        faces: to_owned_list(DEFAULT_FACES),
        actions: to_owned_list(DEFAULT_ACTIONS),
        exclamations: to_owned_list(DEFAULT_EXCLAMATIONS),
        rules,
    })
});

/// A single phoneme substitution: every non-overlapping match of `pattern`
/// is replaced, left to right.
///
/// Replacements may reference capture groups as `${1}` or `$name`.
#[derive(Debug, Clone)]
pub struct PhonemeRule {
    pattern: Regex,
    replacement: String,
}

impl PhonemeRule {
    /// Compiles a rule.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if `pattern` is not a valid regular
    /// expression.
    ///
    /// # Example
    ///
    /// ```
    /// use uwuify::PhonemeRule;
    ///
    /// let rule = PhonemeRule::new("n([aeiou])", "ny${1}").expect("valid pattern");
    /// assert_eq!(rule.apply("banana"), "banyanya");
    /// ```
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// Returns the pattern source.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Returns the replacement template.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Applies the rule across the whole word.
    #[must_use]
    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(word, self.replacement.as_str())
    }
}

/// Ordered decorative lists and phoneme rules.
///
/// # Example
///
/// ```
/// use uwuify::Lexicon;
///
/// let lexicon = Lexicon::default();
/// assert_eq!(lexicon.faces().len(), 10);
/// assert_eq!(lexicon.rules().first().map(|rule| rule.pattern()), Some("ove"));
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    faces: Vec<String>,
    actions: Vec<String>,
    exclamations: Vec<String>,
    rules: Vec<PhonemeRule>,
}

impl Lexicon {
    /// Builds a lexicon from explicit lists.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::EmptyList`] if faces, actions, or
    /// exclamations is empty. An empty rule list is allowed.
    pub fn new(
        faces: Vec<String>,
        actions: Vec<String>,
        exclamations: Vec<String>,
        rules: Vec<PhonemeRule>,
    ) -> Result<Self, LexiconError> {
        for (list, items) in [
            ("faces", &faces),
            ("actions", &actions),
            ("exclamations", &exclamations),
        ] {
            if items.is_empty() {
                return Err(LexiconError::EmptyList { list });
            }
        }

        Ok(Self {
            faces,
            actions,
            exclamations,
            rules,
        })
    }

    /// Parses a lexicon from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if:
    /// - The JSON is malformed or carries unknown keys
    /// - A rule pattern does not compile
    /// - A supplied list is empty
    ///
    /// # Example
    ///
    /// ```
    /// use uwuify::Lexicon;
    ///
    /// let lexicon = Lexicon::from_json(r#"{"faces": ["owo"]}"#).expect("valid lexicon");
    /// assert_eq!(lexicon.faces(), ["owo"]);
    /// assert_eq!(lexicon.exclamations().len(), 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let raw: RawLexicon = serde_json::from_str(json).map_err(|e| LexiconError::Parse {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a lexicon from a JSON file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, LexiconError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| LexiconError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let lexicon = Self::from_json(&contents)?;
        debug!(
            path = %path,
            faces = lexicon.faces.len(),
            actions = lexicon.actions.len(),
            exclamations = lexicon.exclamations.len(),
            rules = lexicon.rules.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    fn from_raw(raw: RawLexicon) -> Result<Self, LexiconError> {
        let defaults = Self::shared_default();

        let rules = raw
            .rules
            .map(compile_rules)
            .transpose()?
            .unwrap_or_else(|| defaults.rules.clone());

        Self::new(
            raw.faces.unwrap_or_else(|| defaults.faces.clone()),
            raw.actions.unwrap_or_else(|| defaults.actions.clone()),
            raw.exclamations
                .unwrap_or_else(|| defaults.exclamations.clone()),
            rules,
        )
    }

    /// Returns the shared built-in lexicon.
    pub(crate) fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// Returns the faces, in order.
    #[must_use]
    pub fn faces(&self) -> &[String] {
        &self.faces
    }

    /// Returns the actions, in order.
    #[must_use]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Returns the exclamation variants, in order.
    #[must_use]
    pub fn exclamations(&self) -> &[String] {
        &self.exclamations
    }

    /// Returns the phoneme rules, in application order.
    #[must_use]
    pub fn rules(&self) -> &[PhonemeRule] {
        &self.rules
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::shared_default().as_ref().clone()
    }
}

fn compile_rules(raw: Vec<RawPhonemeRule>) -> Result<Vec<PhonemeRule>, LexiconError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, rule)| {
            PhonemeRule::new(&rule.pattern, rule.replacement).map_err(|e| {
                LexiconError::InvalidPattern {
                    index,
                    pattern: rule.pattern,
                    message: e.to_string(),
                }
            })
        })
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLexicon {
    faces: Option<Vec<String>>,
    actions: Option<Vec<String>>,
    exclamations: Option<Vec<String>>,
    rules: Option<Vec<RawPhonemeRule>>,
}

/// Raw JSON representation of a phoneme rule.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPhonemeRule {
    pattern: String,
    replacement: String,
}
