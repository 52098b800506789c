//! Diagram element types for the semantic model.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{identifier::Id, span::Span};

/// Width and height of a rendered entity, in renderer units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Default size of a component box.
    pub const COMPONENT: Size = Size::new(100.0, 60.0);

    /// Default size of a container box.
    pub const CONTAINER: Size = Size::new(300.0, 200.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Geometric primitive used to draw an entity.
///
/// The names match the DSL values (lowercase).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Flat box (default)
    #[default]
    Rectangle,
    Pyramid,
    Cylinder,
}

impl FromStr for Shape {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(Self::Rectangle),
            "pyramid" => Ok(Self::Pyramid),
            "cylinder" => Ok(Self::Cylinder),
            _ => Err("Unsupported shape"),
        }
    }
}

impl From<Shape> for &'static str {
    fn from(val: Shape) -> Self {
        match val {
            Shape::Rectangle => "rectangle",
            Shape::Pyramid => "pyramid",
            Shape::Cylinder => "cylinder",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// A named visual template referenced by components and containers.
///
/// Besides the four documented fields, every additional `name=value` pair of
/// the `style` statement is retained in [`Style::properties`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    name: Id,
    icon: Option<String>,
    color: String,
    image: Option<String>,
    shape: Shape,
    properties: IndexMap<String, String>,
}

impl Style {
    /// Color used when a style does not set one.
    pub const DEFAULT_COLOR: &'static str = "#4A90E2";

    /// Create a style with default attributes.
    pub fn new(name: Id) -> Self {
        Self {
            name,
            icon: None,
            color: Self::DEFAULT_COLOR.to_string(),
            image: None,
            shape: Shape::default(),
            properties: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &Id {
        &self.name
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Additional properties that have no dedicated field.
    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = Some(image.into());
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Store an extra property. A repeated name keeps its first position and the last value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }
}

/// An atomic entity of the diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    id: Id,
    label: String,
    style: Option<Id>,
    size: Size,
    parent: Option<Id>,
    #[serde(skip)]
    span: Span,
}

impl Component {
    /// Create a component labelled with its own id and the default size.
    pub fn new(id: Id, span: Span) -> Self {
        Self {
            label: id.to_string(),
            id,
            style: None,
            size: Size::COMPONENT,
            parent: None,
            span,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Name of the referenced style, if the component declared a `type` or `style`.
    pub fn style(&self) -> Option<&Id> {
        self.style.as_ref()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Id of the enclosing container.
    pub fn parent(&self) -> Option<&Id> {
        self.parent.as_ref()
    }

    /// Location of the declaring statement.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_style(&mut self, style: Id) {
        self.style = Some(style);
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_parent(&mut self, parent: Id) {
        self.parent = Some(parent);
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A composite, nestable entity grouping components and other containers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    id: Id,
    label: String,
    style: Option<Id>,
    size: Size,
    children: Vec<Id>,
    parent: Option<Id>,
    #[serde(skip)]
    span: Span,
}

impl Container {
    /// Create an empty container labelled with its own id.
    pub fn new(id: Id, span: Span) -> Self {
        Self {
            label: id.to_string(),
            id,
            style: None,
            size: Size::CONTAINER,
            children: Vec::new(),
            parent: None,
            span,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> Option<&Id> {
        self.style.as_ref()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Ids of the nested components and containers, in declaration order.
    pub fn children(&self) -> &[Id] {
        &self.children
    }

    pub fn parent(&self) -> Option<&Id> {
        self.parent.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_style(&mut self, style: Id) {
        self.style = Some(style);
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_parent(&mut self, parent: Id) {
        self.parent = Some(parent);
    }

    pub fn push_child(&mut self, child: Id) {
        self.children.push(child);
    }

    /// Remove `child`, returning `true` if it was listed.
    pub fn remove_child(&mut self, child: &Id) -> bool {
        let before = self.children.len();
        self.children.retain(|id| id != child);
        self.children.len() != before
    }

    /// Move the children out, leaving the list empty.
    pub fn take_children(&mut self) -> Vec<Id> {
        std::mem::take(&mut self.children)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A directed, optionally labelled edge between two entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation {
    from: Id,
    to: Id,
    label: Option<String>,
    #[serde(skip)]
    span: Span,
}

impl Relation {
    pub fn new(from: Id, to: Id, label: Option<String>, span: Span) -> Self {
        Self {
            from,
            to,
            label,
            span,
        }
    }

    /// Id of the entity the relation starts at (`from`).
    pub fn source(&self) -> &Id {
        &self.from
    }

    /// Id of the entity the relation points to (`to`).
    pub fn target(&self) -> &Id {
        &self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(label) = &self.label {
            write!(f, " : \"{label}\"")?;
        }
        Ok(())
    }
}

/// Tooltip and link metadata attached to one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    target: Id,
    tooltip: Option<String>,
    link: Option<String>,
    #[serde(skip)]
    span: Span,
}

impl Annotation {
    pub fn new(target: Id, span: Span) -> Self {
        Self {
            target,
            tooltip: None,
            link: None,
            span,
        }
    }

    pub fn target(&self) -> &Id {
        &self.target
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = Some(tooltip.into());
    }

    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link = Some(link.into());
    }
}
