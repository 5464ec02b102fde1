//! Probability modifiers controlling each pass.
//!
//! Every value is validated when it is set. A rejected value leaves the
//! previous configuration in place.

use serde::{Deserialize, Serialize};

use crate::error::ModifierError;

/// Default probability ceiling for each phoneme rule.
pub const DEFAULT_WORDS: f64 = 0.9;

/// Default spacing bands.
pub const DEFAULT_SPACES: SpacesModifier = SpacesModifier {
    faces: 0.04,
    actions: 0.02,
    stutters: 0.1,
};

/// Default probability ceiling for replacing trailing `?`/`!` runs.
pub const DEFAULT_EXCLAMATIONS: f64 = 1.0;

/// Probabilities for the three mutually exclusive spacing embellishments.
///
/// The components partition one probability axis into contiguous bands in
/// the order faces, actions, stutters; whatever remains leaves the word
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesModifier {
    /// Chance of appending a face.
    pub faces: f64,
    /// Chance of appending an action.
    pub actions: f64,
    /// Chance of prepending a stutter.
    pub stutters: f64,
}

impl SpacesModifier {
    /// Builds a spaces modifier from its three bands.
    #[must_use]
    pub const fn new(faces: f64, actions: f64, stutters: f64) -> Self {
        Self {
            faces,
            actions,
            stutters,
        }
    }

    /// Returns the combined probability of any embellishment.
    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.faces + self.actions + self.stutters
    }

    /// Returns the cumulative upper bounds of the face, action, and stutter
    /// bands.
    ///
    /// # Example
    ///
    /// ```
    /// use uwuify::SpacesModifier;
    ///
    /// let bands = SpacesModifier::new(0.25, 0.25, 0.5).thresholds();
    /// assert_eq!(bands, (0.25, 0.5, 1.0));
    /// ```
    #[must_use]
    pub const fn thresholds(&self) -> (f64, f64, f64) {
        let face = self.faces;
        let action = self.actions + face;
        let stutter = self.stutters + action;
        (face, action, stutter)
    }

    fn validate(&self) -> Result<(), ModifierError> {
        for (component, value) in [
            ("faces", self.faces),
            ("actions", self.actions),
            ("stutters", self.stutters),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ModifierError::SpacesComponent { component, value });
            }
        }
        let sum = self.sum();
        if !is_probability(sum) {
            return Err(ModifierError::Spaces { sum });
        }
        Ok(())
    }
}

impl Default for SpacesModifier {
    fn default() -> Self {
        DEFAULT_SPACES
    }
}

/// The full set of modifiers consulted by the passes.
///
/// # Example
///
/// ```
/// use uwuify::{Modifiers, ModifierError};
///
/// let mut modifiers = Modifiers::default();
/// assert_eq!(modifiers.words(), 0.9);
///
/// let err = modifiers.set_words(1.5).expect_err("out of range");
/// assert_eq!(err, ModifierError::Words { value: 1.5 });
/// assert_eq!(modifiers.words(), 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    words: f64,
    spaces: SpacesModifier,
    exclamations: f64,
}

impl Modifiers {
    /// Builds a validated set of modifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError`] for the first value outside its interval.
    pub fn new(
        words: f64,
        spaces: SpacesModifier,
        exclamations: f64,
    ) -> Result<Self, ModifierError> {
        let mut modifiers = Self::default();
        modifiers.set_words(words)?;
        modifiers.set_spaces(spaces)?;
        modifiers.set_exclamations(exclamations)?;
        Ok(modifiers)
    }

    /// Returns modifiers under which every pass leaves its input untouched.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            words: 0.0,
            spaces: SpacesModifier::new(0.0, 0.0, 0.0),
            exclamations: 0.0,
        }
    }

    /// Returns the words modifier.
    #[must_use]
    pub const fn words(&self) -> f64 {
        self.words
    }

    /// Returns the spaces modifier.
    #[must_use]
    pub const fn spaces(&self) -> SpacesModifier {
        self.spaces
    }

    /// Returns the exclamations modifier.
    #[must_use]
    pub const fn exclamations(&self) -> f64 {
        self.exclamations
    }

    /// Sets the words modifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::Words`] if `value` is outside `[0, 1]`.
    pub fn set_words(&mut self, value: f64) -> Result<(), ModifierError> {
        if !is_probability(value) {
            return Err(ModifierError::Words { value });
        }
        self.words = value;
        Ok(())
    }

    /// Sets the spaces modifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::SpacesComponent`] for a negative component
    /// and [`ModifierError::Spaces`] if the components sum outside `[0, 1]`.
    pub fn set_spaces(&mut self, value: SpacesModifier) -> Result<(), ModifierError> {
        value.validate()?;
        self.spaces = value;
        Ok(())
    }

    /// Sets the exclamations modifier.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::Exclamations`] if `value` is outside `[0, 1]`.
    pub fn set_exclamations(&mut self, value: f64) -> Result<(), ModifierError> {
        if !is_probability(value) {
            return Err(ModifierError::Exclamations { value });
        }
        self.exclamations = value;
        Ok(())
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS,
            spaces: DEFAULT_SPACES,
            exclamations: DEFAULT_EXCLAMATIONS,
        }
    }
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
