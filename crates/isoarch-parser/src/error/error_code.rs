//! Error codes for the Isoarch diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Syntax errors (parser and builder)
//! - `E2xx` - Validation errors
//! - `E9xx` - Internal errors
//!
//! The tokenizer never reports errors; malformed input surfaces as unknown
//! tokens that the parser rejects with an `E1xx` code.

use std::fmt;

/// The phase an error code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed source text. Parsing stops at the first one.
    Syntax,
    /// Dangling references in an otherwise well-formed diagram.
    Validation,
    /// Broken parser invariants. Never caused by user input alone.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "syntax"),
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser encountered a token of the wrong kind, e.g. a keyword where
    /// an identifier was required.
    E100,

    /// Unexpected end of input.
    ///
    /// The input ended before a complete statement was parsed, e.g. a block
    /// without its closing `}`.
    E101,

    /// Unknown statement.
    ///
    /// A top-level statement did not start with one of `layout`, `style`,
    /// `component`, `container`, `relation`, or `annotation`.
    E102,

    /// Container nested inside itself.
    ///
    /// A container block declares a container with the id of one of its
    /// enclosing containers.
    E103,

    /// Containers nested too deeply.
    ///
    /// A container block opens more than
    /// [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH) containers deep.
    E104,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Undefined relation source.
    E200,

    /// Undefined relation target.
    E201,

    /// Undefined annotation target.
    E202,

    /// Undefined style.
    ///
    /// A component references a style via `type` or `style` that was never
    /// declared.
    E203,

    // =========================================================================
    // Internal Errors (E9xx)
    // =========================================================================
    /// Unresolved container handle.
    ///
    /// A nested declaration referred to an enclosing container that is not
    /// registered in the diagram.
    E900,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            // Validation errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            // Internal errors
            ErrorCode::E900 => "E900",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "unexpected end of input",
            ErrorCode::E102 => "unknown statement",
            ErrorCode::E103 => "container nested inside itself",
            ErrorCode::E104 => "containers nested too deeply",
            ErrorCode::E200 => "undefined relation source",
            ErrorCode::E201 => "undefined relation target",
            ErrorCode::E202 => "undefined annotation target",
            ErrorCode::E203 => "undefined style",
            ErrorCode::E900 => "unresolved container handle",
        }
    }

    /// Returns the phase this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E100
            | ErrorCode::E101
            | ErrorCode::E102
            | ErrorCode::E103
            | ErrorCode::E104 => ErrorCategory::Syntax,
            ErrorCode::E200 | ErrorCode::E201 | ErrorCode::E202 | ErrorCode::E203 => {
                ErrorCategory::Validation
            }
            ErrorCode::E900 => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
