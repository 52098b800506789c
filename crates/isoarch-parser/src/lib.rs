//! # Isoarch Parser
//!
//! Parser for the Isoarch architecture diagram language. This crate provides
//! the pipeline from source text to a validated semantic diagram.
//!
//! ## Usage
//!
//! ```
//! # use isoarch_parser::{parse_and_validate, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         style svc color=#3366FF shape=cylinder
//!         component web { label "Web" type svc }
//!         container backend {
//!             component api { }
//!         }
//!         relation web -> api : "calls"
//!     "#;
//!
//!     let diagram = parse_and_validate(source)?;
//!     assert_eq!(diagram.children_of("backend"), ["api"]);
//!     Ok(())
//! }
//! ```

mod builder;
pub mod error;
mod lexer;
mod parser;
mod parser_types;
mod span;
mod tokens;
mod validate;

pub use error::{Diagnostic, ErrorCode, ParseError};
pub use parser::MAX_NESTING_DEPTH;
pub use span::{Span, Spanned};
pub use tokens::{KEYWORDS, PROPERTIES, PositionedToken, TokenKind};
pub use validate::validate;

use log::debug;

use isoarch_core::semantic::Diagram;

use builder::Builder;

/// Convert source text into positioned tokens.
///
/// Tokenization never fails; text that matches no rule becomes a
/// [`TokenKind::Unknown`] token.
///
/// # Example
///
/// ```
/// # use isoarch_parser::{tokenize, TokenKind};
/// let tokens = tokenize("relation a -> b");
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2].kind, TokenKind::Arrow);
/// assert_eq!((tokens[3].line, tokens[3].column), (1, 15));
/// ```
pub fn tokenize(source: &str) -> Vec<PositionedToken<'_>> {
    lexer::tokenize(source)
}

/// Parse source text into a semantic diagram without validating references.
///
/// The pipeline is:
///
/// 1. **Tokenize** - Convert source text to tokens
/// 2. **Parse** - Build the statement tree from tokens
/// 3. **Build** - Construct the diagram model
///
/// A successfully parsed diagram may still hold dangling references; see
/// [`validate`].
///
/// # Errors
///
/// Returns a [`ParseError`] with a single syntax diagnostic on failure.
///
/// # Example
///
/// ```
/// # use isoarch_parser::{parse, ParseError};
///
/// fn main() -> Result<(), ParseError> {
///     let diagram = parse("relation a -> b")?;
///     assert_eq!(diagram.relations().len(), 1);
///     Ok(())
/// }
/// ```
pub fn parse(source: &str) -> Result<Diagram, ParseError> {
    let tokens = lexer::tokenize(source);
    let statements = parser::parse_statements(&tokens)?;
    let diagram = Builder::new().build(&statements)?;

    debug!("Diagram parsed successfully");
    Ok(diagram)
}

/// Parse source text and validate its cross references.
///
/// # Errors
///
/// Returns the syntax error from [`parse`], or every validation violation
/// found by [`validate`].
pub fn parse_and_validate(source: &str) -> Result<Diagram, ParseError> {
    let diagram = parse(source)?;
    validate(&diagram)?;
    Ok(diagram)
}
