//! Isoarch - A language for isometric architecture diagrams.
//!
//! Parsing and validation for the Isoarch diagram language, plus the helpers
//! a renderer needs: style resolution and JSON serialization of the model.

pub mod config;

mod error;

pub use isoarch_core::{identifier, semantic};

pub use error::IsoarchError;

use log::{debug, info, trace};

use isoarch_core::{identifier::Id, semantic::Style};

use config::AppConfig;

/// Name given to the fallback style returned by [`DiagramBuilder::resolve_style`].
pub const DEFAULT_STYLE_NAME: &str = "default";

/// Builder for parsing Isoarch diagrams.
///
/// This provides an API for processing Isoarch diagrams through parsing,
/// validation and serialization.
///
/// # Examples
///
/// ```rust
/// use isoarch::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     component web { label "Web" }
///     component db { }
///     relation web -> db
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse and validate source into a semantic model
/// let diagram = builder.parse(source).expect("Failed to parse");
///
/// // Serialize the model for a renderer
/// let json = builder.to_json(&diagram).expect("Failed to serialize");
/// assert!(json.contains("\"relations\""));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style and output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse and validate source code into a semantic diagram.
    ///
    /// # Arguments
    ///
    /// * `source` - Isoarch source code as a string
    ///
    /// # Errors
    ///
    /// Returns [`IsoarchError::Parse`] for syntax errors and
    /// [`IsoarchError::Validation`] for dangling references. Both carry the
    /// source text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoarch::{DiagramBuilder, IsoarchError};
    ///
    /// let builder = DiagramBuilder::default();
    /// let err = builder.parse("relation a -> b").unwrap_err();
    ///
    /// assert!(matches!(err, IsoarchError::Validation { .. }));
    /// ```
    pub fn parse(&self, source: &str) -> Result<semantic::Diagram, IsoarchError> {
        let diagram = self.parse_unchecked(source)?;

        isoarch_parser::validate(&diagram)
            .map_err(|err| IsoarchError::new_validation_error(err, source))?;

        debug!("Diagram validated successfully");
        Ok(diagram)
    }

    /// Parse source code without validating cross references.
    ///
    /// # Errors
    ///
    /// Returns [`IsoarchError::Parse`] for syntax errors.
    pub fn parse_unchecked(&self, source: &str) -> Result<semantic::Diagram, IsoarchError> {
        info!(bytes = source.len(); "Parsing diagram");

        let diagram = isoarch_parser::parse(source)
            .map_err(|err| IsoarchError::new_parse_error(err, source))?;

        debug!("Diagram parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// The style a renderer should use for an entity referencing `style`.
    ///
    /// Returns the declared style when it exists. An absent or dangling
    /// reference resolves to a style built from the configured defaults; it
    /// keeps the referenced name, or [`DEFAULT_STYLE_NAME`] when there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isoarch::{DiagramBuilder, semantic::Shape};
    ///
    /// let builder = DiagramBuilder::default();
    /// let diagram = builder
    ///     .parse("style db shape=cylinder\ncontainer vpc { type net }")
    ///     .unwrap();
    ///
    /// let vpc = diagram.container("vpc").unwrap();
    /// let style = builder.resolve_style(&diagram, vpc.style());
    /// assert_eq!(style.name(), "net");
    /// assert_eq!(style.shape(), Shape::Rectangle);
    /// ```
    pub fn resolve_style(&self, diagram: &semantic::Diagram, style: Option<&Id>) -> Style {
        if let Some(declared) = style.and_then(|name| diagram.style(name.as_str())) {
            return declared.clone();
        }

        let name = style.cloned().unwrap_or_else(|| Id::new(DEFAULT_STYLE_NAME));
        debug!(style = name.as_str(); "Using the configured default style");

        let mut fallback = Style::new(name);
        fallback.set_color(self.config.style().default_color());
        fallback.set_shape(self.config.style().default_shape());
        fallback
    }

    /// Serialize a diagram to JSON, pretty-printed unless the configuration
    /// says otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`IsoarchError::Serialize`] if serialization fails.
    pub fn to_json(&self, diagram: &semantic::Diagram) -> Result<String, IsoarchError> {
        let json = if self.config.output().pretty() {
            serde_json::to_string_pretty(diagram)?
        } else {
            serde_json::to_string(diagram)?
        };
        Ok(json)
    }
}
