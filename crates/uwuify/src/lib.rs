//! Deterministic, seed-per-word text uwuification.
//!
//! Every space-delimited token seeds its own random stream from its text,
//! so the same input and configuration always yield the same output.
//! Handles such as `@someone` and URIs pass through the phoneme rules
//! untouched.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Phoneme substitution gated by a per-rule probability
//! - Faces, actions, and stutters partitioned over one probability axis
//! - Replacement of trailing `?`/`!` runs with exclamation variants
//! - Custom lexicons loaded from JSON
//! - Layered settings via `OrthoConfig` and a small CLI
//!
//! # Example
//!
//! ```
//! use uwuify::Uwuifier;
//!
//! let uwuifier = Uwuifier::new();
//! assert_eq!(uwuifier.uwuify_sentence("Hello world!"), "Hewwo w-w-wowwd!!11");
//! ```

mod classify;
pub mod cli;
mod error;
mod lexicon;
mod modifiers;
mod seed;
mod settings;
mod uwuifier;

pub use classify::{UriParts, capital_ratio, is_break, is_handle, is_uri};
pub use error::{LexiconError, ModifierError, RangeError, SettingsError};
pub use lexicon::{Lexicon, PhonemeRule};
pub use modifiers::{
    DEFAULT_EXCLAMATIONS, DEFAULT_SPACES, DEFAULT_WORDS, Modifiers, SpacesModifier,
};
pub use seed::Seed;
pub use settings::UwuifySettings;
pub use uwuifier::Uwuifier;
