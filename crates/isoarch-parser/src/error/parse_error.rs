//! The ParseError type for wrapping parsing diagnostics.
//!
//! [`ParseError`] wraps one or more [`Diagnostic`]s that occurred during
//! parsing, model building, or validation.

use std::fmt;

use crate::error::{Diagnostic, ErrorCategory};

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error type for the parsing lifecycle.
///
/// Wraps one or more diagnostics. Displays one diagnostic per line.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The phase of the first coded diagnostic, if any.
    pub fn category(&self) -> Option<ErrorCategory> {
        self.diagnostics.iter().find_map(Diagnostic::category)
    }

    /// The messages of every diagnostic, in emission order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(Diagnostic::message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let diag = Diagnostic::error("test error").with_code(ErrorCode::E102);
        let err: ParseError = diag.into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].message(), "test error");
        assert_eq!(err.category(), Some(ErrorCategory::Syntax));
    }

    #[test]
    fn test_parse_error_from_vec() {
        let diags = vec![Diagnostic::error("error 1"), Diagnostic::error("error 2")];
        let err: ParseError = diags.into();

        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.category(), None);
        assert_eq!(err.messages().collect::<Vec<_>>(), ["error 1", "error 2"]);
    }

    #[test]
    fn test_parse_error_display_single() {
        let diag = Diagnostic::error("Relation source 'a' not found").with_code(ErrorCode::E200);
        let err: ParseError = diag.into();

        assert_eq!(err.to_string(), "error[E200]: Relation source 'a' not found");
    }

    #[test]
    fn test_parse_error_display_multiple() {
        let diags = vec![
            Diagnostic::error("Relation source 'a' not found").with_code(ErrorCode::E200),
            Diagnostic::error("Relation target 'b' not found").with_code(ErrorCode::E201),
        ];
        let err: ParseError = diags.into();

        assert_eq!(
            err.to_string(),
            "error[E200]: Relation source 'a' not found\n\
             error[E201]: Relation target 'b' not found"
        );
    }
}
