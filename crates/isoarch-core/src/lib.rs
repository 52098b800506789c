//! Isoarch Core Types and Definitions
//!
//! This crate provides the foundational types for the Isoarch architecture
//! diagram language. It includes:
//!
//! - **Identifiers**: Owned entity identifiers ([`identifier::Id`])
//! - **Spans**: Source locations attached to model elements ([`span::Span`])
//! - **Semantic**: The diagram model handed to renderers ([`semantic`] module)

pub mod identifier;
pub mod semantic;
pub mod span;
