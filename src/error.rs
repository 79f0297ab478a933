//! Error types for vocabulary builds

use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while building vocabularies
///
/// Variants for which [`BuildError::is_reportable`] holds describe expected
/// conditions (bad configuration, missing files, converter failures) and
/// are shown to the user as a one-line message. Everything else points at
/// malformed input or a bug and is shown with full detail.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Cannot open or read vocabulary configuration {path}: {source}")]
    UnreadableConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error in vocabulary configuration {path}, line {line}: {reason}")]
    ConfigSyntax {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Vocabulary definition for {section} incomplete: {} missing.", .keys.join(", "))]
    MissingKeys { section: String, keys: Vec<String> },

    #[error("Expected terms file {} cannot be read.", .path.display())]
    UnreadableTerms {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Non-official install roots not currently supported, sorry: {0}")]
    UnsupportedInstallRoot(String),

    #[error("Invalid install root '{uri}': {source}")]
    InvalidInstallRoot {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Cannot run RDF converter '{program}': {source}")]
    ConverterUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Conversion to RDF+XML failed ({status}). Output of the failed converter run:\n{output}")]
    ConversionFailed { status: ExitStatus, output: String },

    #[error("Error in terms file {}: {source}", .path.display())]
    Terms {
        path: PathBuf,
        #[source]
        source: TermsError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuildError {
    /// Whether this is an expected, explainable condition
    pub fn is_reportable(&self) -> bool {
        !matches!(
            self,
            BuildError::Terms { .. } | BuildError::Io(_) | BuildError::Json(_)
        )
    }

    /// The input file an unexpected error was raised from, if known
    pub fn source_file(&self) -> Option<&PathBuf> {
        match self {
            BuildError::Terms { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Errors in the content of a terms file
#[derive(Error, Debug)]
pub enum TermsError {
    #[error("line {line}: level '{value}' is not an integer")]
    MalformedLevel {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: level must be at least 1")]
    ZeroLevel { line: u64 },

    #[error("line {line}: level jumps from {previous} to {level}")]
    LevelJump { line: u64, previous: usize, level: usize },

    #[error("line {line}: empty predicate")]
    EmptyPredicate { line: u64 },

    #[error("line {line}: expected at least predicate and level, found {found} column(s)")]
    MissingColumns { line: u64, found: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
