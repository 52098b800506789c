//! Configuration types for Isoarch diagram processing.
//!
//! All types implement [`serde::Deserialize`], so a configuration can be
//! loaded from any serde format. Every field has a default, and an empty
//! document yields [`AppConfig::default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - The style used for entities without a resolvable style.
//! - [`OutputConfig`] - How the diagram model is serialized.
//!
//! # Example
//!
//! ```
//! # use isoarch::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.output().pretty());
//! assert_eq!(config.style().default_color(), "#4A90E2");
//! ```

use serde::Deserialize;

use isoarch_core::semantic::{Shape, Style};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Fallback style section.
    #[serde(default)]
    style: StyleConfig,

    /// Output section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, output: OutputConfig) -> Self {
        Self { style, output }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Attributes of the style applied when an entity names no style, or a style
/// that does not exist.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Fill color, as written in the DSL (`#RRGGBB`).
    #[serde(default = "default_color")]
    default_color: String,

    /// Shape primitive.
    #[serde(default)]
    default_shape: Shape,
}

fn default_color() -> String {
    Style::DEFAULT_COLOR.to_string()
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    ///
    /// # Arguments
    ///
    /// * `default_color` - Fill color of the fallback style.
    /// * `default_shape` - Shape of the fallback style.
    pub fn new(default_color: impl Into<String>, default_shape: Shape) -> Self {
        Self {
            default_color: default_color.into(),
            default_shape,
        }
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    pub fn default_shape(&self) -> Shape {
        self.default_shape
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(default_color(), Shape::default())
    }
}

/// Serialization options for the diagram model.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl OutputConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Returns `true` if JSON output is pretty-printed.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(default_pretty())
    }
}
