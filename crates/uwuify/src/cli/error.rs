//! Error types for the uwuify CLI.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::error::{LexiconError, SettingsError};

/// Errors surfaced while configuring or running the CLI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// Settings could not be loaded or resolved.
    #[error("settings error: {source}")]
    Settings {
        /// Underlying settings error.
        #[from]
        #[source]
        source: SettingsError,
    },
    /// The lexicon path is not valid UTF-8.
    #[error("lexicon path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// Path as supplied.
        path: PathBuf,
    },
    /// The directory holding the lexicon could not be opened.
    #[error("failed to open lexicon directory '{path}': {message}")]
    OpenDir {
        /// Directory that failed to open.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// The lexicon file could not be loaded.
    #[error("lexicon error: {source}")]
    Lexicon {
        /// Underlying lexicon error.
        #[from]
        #[source]
        source: LexiconError,
    },
    /// Reading input or writing output failed.
    #[error("i/o error: {message}")]
    Io {
        /// Description of the I/O error.
        message: String,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
