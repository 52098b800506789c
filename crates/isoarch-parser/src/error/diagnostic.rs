//! A located error report.
//!
//! Every [`Diagnostic`] is an error: the tokenizer never fails and malformed
//! values fall back to defaults with a log warning, so nothing reaches the
//! user as a non-fatal diagnostic.

use std::fmt;

use crate::{
    error::{ErrorCategory, error_code::ErrorCode},
    span::Span,
};

/// A message attached to a source span.
///
/// The primary label points at the offending text; secondary labels point at
/// related declarations.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

/// An error with an optional code, labeled spans and help text.
///
/// ```text
/// error[E203]: Style 'svc' not found for component 'x'
///   --> diagram.iso:3:1
///    |
///  3 | component x { type svc }
///    | ^^^^^^^^^^^^^^^^^^^^^^^^ undefined style
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use isoarch_parser::error::{Diagnostic, ErrorCode};
    /// # use isoarch_parser::Span;
    ///
    /// let diag = Diagnostic::error("Style 'svc' not found for component 'x'")
    ///     .with_code(ErrorCode::E203)
    ///     .with_label(Span::new(0..24), "undefined style")
    ///     .with_help("declare it with `style svc ...`");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// The phase the error code belongs to, if there is a code.
    pub fn category(&self) -> Option<ErrorCategory> {
        self.code.map(|code| code.category())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels in the order they were attached, primary first.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), true)
    }

    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), false)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn push_label(mut self, span: Span, message: String, primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            primary,
        });
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{code}]: {}", self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}
