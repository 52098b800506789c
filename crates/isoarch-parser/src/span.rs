//! Source spans, shared with the semantic model.

pub use isoarch_core::span::{Span, Spanned};
