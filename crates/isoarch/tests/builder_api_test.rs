//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use isoarch::{DiagramBuilder, IsoarchError, config::AppConfig, semantic::Shape};

#[test]
fn test_parse_simple_diagram() {
    let source = r#"
        component app { label "App" }
    "#;

    let builder = DiagramBuilder::default();
    let result = builder.parse(source);
    assert!(
        result.is_ok(),
        "Should parse valid diagram: {:?}",
        result.err()
    );
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let invalid_source = "this is not valid isoarch syntax!!!";

    let builder = DiagramBuilder::default();
    match builder.parse(invalid_source) {
        Err(IsoarchError::Parse { err, src }) => {
            assert_eq!(src, invalid_source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_validation_errors_are_aggregated() {
    let source = "relation a -> b\nannotation c { }";

    let builder = DiagramBuilder::default();
    let err = builder.parse(source).expect_err("Validation should fail");

    let (parse_err, src) = err.diagnostics().expect("Validation errors carry diagnostics");
    assert!(matches!(err, IsoarchError::Validation { .. }));
    assert_eq!(src, source);
    assert_eq!(parse_err.diagnostics().len(), 3);
    assert_eq!(err.to_string().lines().count(), 3);
}

#[test]
fn test_parse_unchecked_skips_validation() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .parse_unchecked("relation a -> b")
        .expect("References are not checked");

    assert_eq!(diagram.relations().len(), 1);
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.parse("component a { }").expect("Failed to parse first");
    let second = builder.parse("component b { }").expect("Failed to parse second");

    assert!(first.component("a").is_some());
    assert!(second.component("b").is_some());
    assert!(second.component("a").is_none());
}

#[test]
fn test_resolve_style_for_dangling_container_style() {
    let source = r#"
        style db shape=cylinder color=#AA0000
        container storage { type missing component pg { type db } }
    "#;

    let builder = DiagramBuilder::default();
    let diagram = builder.parse(source).expect("Container styles are not validated");

    let storage = diagram.container("storage").unwrap();
    let fallback = builder.resolve_style(&diagram, storage.style());
    assert_eq!(fallback.name(), "missing");
    assert_eq!(fallback.shape(), Shape::Rectangle);

    let pg = diagram.component("pg").unwrap();
    let declared = builder.resolve_style(&diagram, pg.style());
    assert_eq!(declared.shape(), Shape::Cylinder);
    assert_eq!(declared.color(), "#AA0000");
}

#[test]
fn test_to_json_contract() {
    let source = r#"
        layout direction=LR
        container c { component a { label "A" } }
        relation a -> c : "in"
    "#;

    let builder = DiagramBuilder::new(AppConfig::default());
    let diagram = builder.parse(source).expect("Failed to parse");
    let json = builder.to_json(&diagram).expect("Failed to serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("Output is JSON");
    assert_eq!(value["layout"]["direction"], "LR");
    assert_eq!(value["containers"]["c"]["children"][0], "a");
    assert_eq!(value["components"]["a"]["parent"], "c");
    assert_eq!(value["components"]["a"]["label"], "A");
    assert_eq!(value["relations"][0]["label"], "in");
    // Pretty by default
    assert!(json.contains('\n'));
}
