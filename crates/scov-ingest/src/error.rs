//! Error types for scenario ingestion
//!
//! Provides error handling for:
//! - Parse operations (artifact text → scenarios)
//! - Analysis (parser selection, validation, IO)

use scov_core::ScovError;
use std::path::PathBuf;

/// Errors while turning artifact text into scenarios
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No parser registered for file extension
    #[error("no parser registered for extension: '{0}'")]
    NoParserForExtension(String),

    /// Structural error in the artifact text
    #[error("syntax error at line {line}: {message}")]
    SyntaxError {
        /// 1-based line number
        line: usize,
        /// What was wrong
        message: String,
    },

    /// Malformed JSON scenario list
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML scenario list
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ParseError {
    /// Create syntax error at a 1-based line
    pub fn syntax_error(line: usize, message: impl Into<String>) -> Self {
        Self::SyntaxError {
            line,
            message: message.into(),
        }
    }
}

/// Errors from the analysis pipeline
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Parser failed on an artifact
    #[error("failed to parse '{name}': {source}")]
    Parse {
        /// Artifact name
        name: String,
        /// Underlying parser error
        #[source]
        source: ParseError,
    },

    /// Parsed scenarios failed validation
    #[error("invalid scenarios in '{name}': {source}")]
    Validation {
        /// Artifact name
        name: String,
        /// First validation failure
        #[source]
        source: ScovError,
    },

    /// IO error while reading an artifact
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Wrap a parse error with the artifact name
    pub fn parse(name: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            name: name.into(),
            source,
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;
