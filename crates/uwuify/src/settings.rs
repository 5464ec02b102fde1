//! Layered settings loaded via `OrthoConfig`.
//!
//! Values come from `UWUIFY_*` environment variables and the usual
//! `OrthoConfig` configuration files. Anything left unset falls back to the
//! built-in defaults.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::{ModifierError, SettingsError};
use crate::modifiers::{
    DEFAULT_EXCLAMATIONS, DEFAULT_SPACES, DEFAULT_WORDS, Modifiers, SpacesModifier,
};

/// Configuration values controlling the uwuifier.
#[derive(Debug, Clone, PartialEq, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "UWUIFY")]
pub struct UwuifySettings {
    /// Probability ceiling for each phoneme rule.
    #[ortho_config(default = 0.9)]
    pub words: f64,
    /// Width of the faces band.
    #[ortho_config(default = 0.04)]
    pub faces: f64,
    /// Width of the actions band.
    #[ortho_config(default = 0.02)]
    pub actions: f64,
    /// Width of the stutters band.
    #[ortho_config(default = 0.1)]
    pub stutters: f64,
    /// Chance of replacing a trailing `?`/`!` run.
    #[ortho_config(default = 1.0)]
    pub exclamations: f64,
    /// Optional lexicon JSON file.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for UwuifySettings {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS,
            faces: DEFAULT_SPACES.faces,
            actions: DEFAULT_SPACES.actions,
            stutters: DEFAULT_SPACES.stutters,
            exclamations: DEFAULT_EXCLAMATIONS,
            lexicon_path: None,
        }
    }
}

impl UwuifySettings {
    /// Loads settings from the environment and configuration files only.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] if a source holds malformed values.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from("uwuify")]).map_err(|e| SettingsError::Load {
            message: e.to_string(),
        })
    }

    /// Validates the configured values as a modifier set.
    ///
    /// The spaces bands are checked together, so a single band override is
    /// validated against the default widths of the other two.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError`] for the first out-of-range value.
    ///
    /// # Example
    ///
    /// ```
    /// use uwuify::UwuifySettings;
    ///
    /// let settings = UwuifySettings {
    ///     faces: 0.5,
    ///     ..UwuifySettings::default()
    /// };
    /// let modifiers = settings.modifiers().expect("valid settings");
    /// assert_eq!(modifiers.spaces().faces, 0.5);
    /// assert_eq!(modifiers.spaces().actions, 0.02);
    /// ```
    pub fn modifiers(&self) -> Result<Modifiers, ModifierError> {
        Modifiers::new(
            self.words,
            SpacesModifier::new(self.faces, self.actions, self.stutters),
            self.exclamations,
        )
    }
}
