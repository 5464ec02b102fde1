//! Error types for the uwuify crate.
//!
//! This module defines semantic error enums for generator misuse, modifier
//! validation, lexicon loading, and settings resolution, following the
//! project's error handling conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when a numeric range is unusable.
///
/// Covers both generator misuse (`min > max` or `min == max`) and is the
/// only failure mode of [`crate::Seed`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// The lower bound exceeds the upper bound.
    #[error("minimum value {min} must be below maximum value {max}")]
    MinAboveMax {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },

    /// Both bounds are equal, leaving nothing to draw from.
    #[error("minimum value cannot equal maximum value ({value})")]
    EmptyRange {
        /// The shared bound.
        value: f64,
    },
}

/// Errors raised when a modifier value falls outside its valid interval.
///
/// A rejected value never replaces the previously configured one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModifierError {
    /// The words modifier is outside `[0, 1]`.
    #[error("words modifier must be between 0 and 1, got {value}")]
    Words {
        /// Rejected value.
        value: f64,
    },

    /// One component of the spaces modifier is negative or not a number.
    #[error("spaces modifier {component} must be a non-negative number, got {value}")]
    SpacesComponent {
        /// Name of the offending component.
        component: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The spaces modifier components sum outside `[0, 1]`.
    #[error("spaces modifier sum must be between 0 and 1, got {sum}")]
    Spaces {
        /// Sum of faces, actions, and stutters.
        sum: f64,
    },

    /// The exclamations modifier is outside `[0, 1]`.
    #[error("exclamations modifier must be between 0 and 1, got {value}")]
    Exclamations {
        /// Rejected value.
        value: f64,
    },
}

/// Errors that can occur when building or loading a lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon file at '{path}': {message}")]
    Io {
        /// Path to the lexicon file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The lexicon JSON is malformed.
    #[error("invalid lexicon JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// A phoneme rule pattern is not a valid regular expression.
    #[error("invalid phoneme rule pattern at index {index} ('{pattern}'): {message}")]
    InvalidPattern {
        /// Index of the rule in the lexicon.
        index: usize,
        /// The rejected pattern source.
        pattern: String,
        /// Regex compiler message.
        message: String,
    },

    /// A decorative list that the passes draw from is empty.
    #[error("lexicon list '{list}' must not be empty")]
    EmptyList {
        /// Name of the empty list.
        list: &'static str,
    },
}

/// Errors that can occur while resolving layered settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// Environment or configuration file values could not be loaded.
    #[error("failed to load settings: {message}")]
    Load {
        /// Description of the loader failure.
        message: String,
    },

    /// A loaded modifier value is out of range.
    #[error("invalid modifier setting: {0}")]
    Modifier(#[from] ModifierError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_min_above_max_formats_correctly() {
        let err = RangeError::MinAboveMax { min: 1.0, max: 0.0 };
        assert_eq!(err.to_string(), "minimum value 1 must be below maximum value 0");
    }

    #[test]
    fn range_error_empty_range_formats_correctly() {
        let err = RangeError::EmptyRange { value: 5.0 };
        assert_eq!(
            err.to_string(),
            "minimum value cannot equal maximum value (5)"
        );
    }

    #[test]
    fn modifier_error_words_formats_correctly() {
        let err = ModifierError::Words { value: 1.5 };
        assert_eq!(
            err.to_string(),
            "words modifier must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn modifier_error_spaces_component_formats_correctly() {
        let err = ModifierError::SpacesComponent {
            component: "faces",
            value: -0.25,
        };
        assert_eq!(
            err.to_string(),
            "spaces modifier faces must be a non-negative number, got -0.25"
        );
    }

    #[test]
    fn modifier_error_spaces_formats_correctly() {
        let err = ModifierError::Spaces { sum: 1.25 };
        assert_eq!(
            err.to_string(),
            "spaces modifier sum must be between 0 and 1, got 1.25"
        );
    }

    #[test]
    fn lexicon_error_invalid_pattern_formats_correctly() {
        let err = LexiconError::InvalidPattern {
            index: 3,
            pattern: "(".to_owned(),
            message: "unclosed group".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid phoneme rule pattern at index 3 ('('): unclosed group"
        );
    }

    #[test]
    fn lexicon_error_empty_list_formats_correctly() {
        let err = LexiconError::EmptyList { list: "faces" };
        assert_eq!(err.to_string(), "lexicon list 'faces' must not be empty");
    }

    #[test]
    fn settings_error_wraps_modifier_error() {
        let err = SettingsError::from(ModifierError::Exclamations { value: 2.0 });
        assert_eq!(
            err.to_string(),
            "invalid modifier setting: exclamations modifier must be between 0 and 1, got 2"
        );
    }
}
