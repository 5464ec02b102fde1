//! Command-line front end for the uwuifier.
//!
//! The binary delegates to this module for argument handling and I/O so the
//! behaviour can be exercised in tests without spawning a process. Flag
//! values override settings, which override the built-in defaults.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::{Parser, ValueEnum};
use tracing::debug;

use crate::error::{LexiconError, SettingsError};
use crate::lexicon::Lexicon;
use crate::settings::UwuifySettings;
use crate::uwuifier::Uwuifier;

mod error;

pub use error::CliError;

/// `uwuify` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "uwuify",
    about = "Deterministically uwuify text, leaving URLs and handles alone",
    version
)]
pub struct Cli {
    /// Transformation to run.
    #[arg(long, value_enum, default_value_t = Pass::Sentence)]
    pub pass: Pass,
    /// Probability ceiling for each phoneme rule.
    #[arg(long, value_name = "probability")]
    pub words: Option<f64>,
    /// Chance of appending a face.
    #[arg(long, value_name = "probability")]
    pub faces: Option<f64>,
    /// Chance of appending an action.
    #[arg(long, value_name = "probability")]
    pub actions: Option<f64>,
    /// Chance of stuttering.
    #[arg(long, value_name = "probability")]
    pub stutters: Option<f64>,
    /// Chance of replacing trailing `?`/`!` runs.
    #[arg(long, value_name = "probability")]
    pub exclamations: Option<f64>,
    /// Lexicon JSON file replacing the built-in lists.
    #[arg(long, value_name = "path")]
    pub lexicon: Option<PathBuf>,
    /// Text to transform. Standard input is read line by line when omitted.
    pub text: Vec<String>,
}

impl Cli {
    /// Layers the flags given on the command line over `settings`.
    fn layer_over(&self, settings: UwuifySettings) -> UwuifySettings {
        UwuifySettings {
            words: self.words.unwrap_or(settings.words),
            faces: self.faces.unwrap_or(settings.faces),
            actions: self.actions.unwrap_or(settings.actions),
            stutters: self.stutters.unwrap_or(settings.stutters),
            exclamations: self.exclamations.unwrap_or(settings.exclamations),
            lexicon_path: self.lexicon.clone().or(settings.lexicon_path),
        }
    }
}

/// Transformations exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pass {
    /// Phoneme substitutions only.
    Words,
    /// Faces, actions, and stutters only.
    Spaces,
    /// Exclamation replacement only.
    Exclamations,
    /// All three passes.
    Sentence,
}

impl Pass {
    /// Runs this pass over `text`.
    #[must_use]
    pub fn apply(self, uwuifier: &Uwuifier, text: &str) -> String {
        match self {
            Self::Words => uwuifier.uwuify_words(text),
            Self::Spaces => uwuifier.uwuify_spaces(text),
            Self::Exclamations => uwuifier.uwuify_exclamations(text),
            Self::Sentence => uwuifier.uwuify_sentence(text),
        }
    }
}

/// Builds an uwuifier from `settings` with the flag overrides applied.
///
/// # Errors
///
/// Returns [`CliError`] when a modifier is out of range or the lexicon
/// cannot be loaded.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use uwuify::UwuifySettings;
/// use uwuify::cli::{Cli, build_uwuifier};
///
/// let cli = Cli::try_parse_from(["uwuify", "--words", "1"]).expect("parse");
/// let uwuifier = build_uwuifier(&cli, UwuifySettings::default()).expect("build");
/// assert_eq!(uwuifier.words_modifier(), 1.0);
/// ```
pub fn build_uwuifier(cli: &Cli, settings: UwuifySettings) -> Result<Uwuifier, CliError> {
    let merged = cli.layer_over(settings);
    let modifiers = merged.modifiers().map_err(SettingsError::from)?;
    let uwuifier = Uwuifier::new().with_modifiers(modifiers);

    let Some(path) = merged.lexicon_path else {
        return Ok(uwuifier);
    };
    Ok(uwuifier.with_lexicon(load_lexicon(path)?))
}

/// Transforms the positional text, or every line of `input` when there is
/// none, writing one result line per input line.
///
/// # Errors
///
/// Returns [`CliError::Io`] if reading or writing fails.
pub fn run(
    cli: &Cli,
    uwuifier: &Uwuifier,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), CliError> {
    if !cli.text.is_empty() {
        writeln!(output, "{}", cli.pass.apply(uwuifier, &cli.text.join(" ")))?;
        return Ok(());
    }

    let mut count = 0_usize;
    for line in input.lines() {
        let text = line?;
        writeln!(output, "{}", cli.pass.apply(uwuifier, &text))?;
        count += 1;
    }
    debug!(lines = count, pass = ?cli.pass, "input drained");
    Ok(())
}

fn load_lexicon(path: PathBuf) -> Result<Lexicon, CliError> {
    let utf8 = Utf8PathBuf::from_path_buf(path)
        .map_err(|original| CliError::NonUtf8Path { path: original })?;
    let file_name = utf8.file_name().ok_or_else(|| LexiconError::Io {
        path: utf8.clone(),
        message: "path does not name a file".to_owned(),
    })?;
    let parent = utf8
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| CliError::OpenDir {
        path: parent.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(Lexicon::from_file(&dir, Utf8Path::new(file_name))?)
}
