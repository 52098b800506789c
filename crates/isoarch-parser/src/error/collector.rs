//! Collector for accumulating diagnostics during a processing phase.
//!
//! The [`DiagnosticCollector`] lets the validator report every violation
//! instead of failing on the first one.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during a processing phase.
///
/// # Example
///
/// ```text
/// let mut collector = DiagnosticCollector::new();
///
/// collector.emit(
///     Diagnostic::error("Relation source 'a' not found")
///         .with_code(ErrorCode::E200)
///         .with_label(span, "undefined entity")
/// );
///
/// let result = collector.finish();
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection, failing with every emitted diagnostic if there are any.
    pub fn finish(self) -> Result<(), ParseError> {
        if !self.diagnostics.is_empty() {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}
