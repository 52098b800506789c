//! Referential integrity checks on a built [`Diagram`].
//!
//! Validation never stops early: every dangling reference becomes one
//! diagnostic, and all of them are returned together. Checks run in a fixed
//! order: relation endpoints, annotation targets, then component styles.
//! Container style references are deliberately not checked.

use log::debug;

use isoarch_core::semantic::Diagram;

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};

/// Validate cross references in `diagram`.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per dangling reference.
pub fn validate(diagram: &Diagram) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    for relation in diagram.relations() {
        if !diagram.contains_entity(relation.source().as_str()) {
            collector.emit(
                Diagnostic::error(format!("Relation source '{}' not found", relation.source()))
                    .with_code(ErrorCode::E200)
                    .with_label(relation.span(), "undefined source")
                    .with_help(format!(
                        "declare `{}` as a component or container",
                        relation.source()
                    )),
            );
        }
        if !diagram.contains_entity(relation.target().as_str()) {
            collector.emit(
                Diagnostic::error(format!("Relation target '{}' not found", relation.target()))
                    .with_code(ErrorCode::E201)
                    .with_label(relation.span(), "undefined target")
                    .with_help(format!(
                        "declare `{}` as a component or container",
                        relation.target()
                    )),
            );
        }
    }

    for annotation in diagram.annotations().values() {
        if !diagram.contains_entity(annotation.target().as_str()) {
            collector.emit(
                Diagnostic::error(format!(
                    "Annotation target '{}' not found",
                    annotation.target()
                ))
                .with_code(ErrorCode::E202)
                .with_label(annotation.span(), "undefined target"),
            );
        }
    }

    for component in diagram.components().values() {
        let Some(style) = component.style() else {
            continue;
        };
        if diagram.style(style.as_str()).is_none() {
            collector.emit(
                Diagnostic::error(format!(
                    "Style '{style}' not found for component '{}'",
                    component.id()
                ))
                .with_code(ErrorCode::E203)
                .with_label(component.span(), "undefined style")
                .with_help(format!("declare it with `style {style} ...`")),
            );
        }
    }

    collector.finish()?;
    debug!("Diagram references are valid");
    Ok(())
}
