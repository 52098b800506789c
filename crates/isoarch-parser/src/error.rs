//! Error and diagnostic system for the Isoarch parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans for rich error context
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error with an optional error code, source
//! locations, and help text. One or more diagnostics are wrapped in
//! [`ParseError`] for returning from the parsing lifecycle. Syntax errors
//! always carry exactly one diagnostic; validation errors carry one per
//! violation.
//!
//! # Example
//!
//! ```
//! # use isoarch_parser::error::{Diagnostic, ErrorCode};
//! # use isoarch_parser::Span;
//!
//! let span = Span::new(40..55);
//!
//! let diag = Diagnostic::error("Relation source 'web' not found")
//!     .with_code(ErrorCode::E200)
//!     .with_label(span, "undefined entity")
//!     .with_help("declare `web` as a component or container");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{ErrorCategory, ErrorCode};
pub use parse_error::ParseError;
