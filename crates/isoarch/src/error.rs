//! Error types for Isoarch operations.
//!
//! This module provides the main error type [`IsoarchError`] which wraps
//! the error conditions that can occur while processing a diagram.

use std::io;

use thiserror::Error;

use isoarch_parser::ParseError;

/// The main error type for Isoarch operations.
///
/// # Diagnostic Variants
///
/// The `Parse` and `Validation` variants carry structured diagnostics with
/// source spans, together with the source text they point into, so callers
/// can render rich reports.
#[derive(Debug, Error)]
pub enum IsoarchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{err}")]
    Validation { err: ParseError, src: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IsoarchError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Validation` error with the associated source code.
    pub fn new_validation_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Validation {
            err,
            src: src.into(),
        }
    }

    /// The diagnostics and source text, for the variants that carry them.
    pub fn diagnostics(&self) -> Option<(&ParseError, &str)> {
        match self {
            Self::Parse { err, src } | Self::Validation { err, src } => Some((err, src)),
            Self::Io(_) | Self::Serialize(_) => None,
        }
    }
}
