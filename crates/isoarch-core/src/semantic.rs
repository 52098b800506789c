//! Semantic diagram model types.
//!
//! This module contains the representation of a diagram after parsing. It is
//! the contract between the parser and any renderer: renderers read
//! `components`, `containers` (with their `children`), `relations`,
//! `annotations`, `styles`, and `layout` from a [`Diagram`].
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ lexer
//! Tokens
//!     ↓ parser
//! Statements (parser_types) - syntactic structure with spans
//!     ↓ builder
//! Semantic Model (these types)
//!     ↓ validate
//! Validated Semantic Model → renderer
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - The root [`Diagram`] and its [`Layout`]
//! - [`element`] - Entities and metadata: [`Component`], [`Container`], [`Relation`],
//!   [`Annotation`], [`Style`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
