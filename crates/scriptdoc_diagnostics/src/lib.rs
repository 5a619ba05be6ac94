//! scriptdoc_diagnostics: Error types shared by the scriptdoc crates.
//!
//! Every error carries a stable diagnostic code so that the CLI can report it
//! through `miette` with the same shape regardless of which crate raised it.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding or encoding document trees.
#[derive(Debug, Error, Diagnostic)]
pub enum DocError {
    /// A node carried a kind tag outside the closed document kind set.
    ///
    /// This is the only fatal path of the printer core. Inside the process the
    /// kind set is an exhaustive enum, so the check lives at the decode
    /// boundary where foreign input enters.
    #[error("do not know how to print document kind `{kind}` at {path}")]
    #[diagnostic(code(scriptdoc::unhandled_kind), help("known kinds: {known}"))]
    UnhandledKind {
        /// The unrecognized kind tag.
        kind: String,
        /// JSON path of the offending node, e.g. `$[0].body[2]`.
        path: String,
        /// Comma separated list of the kinds the printer does know.
        known: String,
    },

    /// A node object had a `kind` field that was not a string.
    #[error("document kind at {path} must be a string")]
    #[diagnostic(code(scriptdoc::malformed_kind))]
    MalformedKind {
        /// JSON path of the offending node.
        path: String,
    },

    /// An operation node had the wrong number of operands for its operator.
    #[error("operator {op} takes {expected} operands, got {got} at {path}")]
    #[diagnostic(code(scriptdoc::operand_count))]
    OperandCount {
        /// The operator name as written in the document.
        op: String,
        /// Operand count the operator requires.
        expected: usize,
        /// Operand count found.
        got: usize,
        /// JSON path of the offending node.
        path: String,
    },

    /// The input was not valid JSON or did not match a node's payload shape.
    #[error("invalid document: {0}")]
    #[diagnostic(code(scriptdoc::json))]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading printer configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    #[diagnostic(code(scriptdoc::config::io))]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file was not valid JSON or had unknown fields.
    #[error("failed to parse config {path}: {source}")]
    #[diagnostic(code(scriptdoc::config::parse))]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// The indentation width was outside the supported range.
    #[error("indentSpaces must be between {min} and {max}, got {value}")]
    #[diagnostic(code(scriptdoc::config::indent))]
    InvalidIndent {
        /// The rejected value.
        value: usize,
        /// Smallest accepted width.
        min: usize,
        /// Largest accepted width.
        max: usize,
    },
}

/// Result type for document operations.
pub type DocResult<T> = std::result::Result<T, DocError>;

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
