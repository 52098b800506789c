//! Root diagram structure types.
//!
//! - [`Diagram`] - The root aggregate produced by the parser
//! - [`Layout`] - Global layout settings of a diagram
//! - [`Direction`] - Rank direction of the layout

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    identifier::Id,
    semantic::element::{Annotation, Component, Container, Relation, Style},
};

/// Rank direction used by the downstream layout.
///
/// The names match the DSL values (`LR`, `RL`, `TB`, `BT`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "RL")]
    RightToLeft,
    /// Top to bottom (default)
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "BT")]
    BottomToTop,
}

impl FromStr for Direction {
    type Err = &'static str;

    /// Parses `LR`, `RL`, `TB` or `BT`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LR" => Ok(Self::LeftToRight),
            "RL" => Ok(Self::RightToLeft),
            "TB" => Ok(Self::TopToBottom),
            "BT" => Ok(Self::BottomToTop),
            _ => Err("Unsupported direction"),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::LeftToRight => "LR",
            Direction::RightToLeft => "RL",
            Direction::TopToBottom => "TB",
            Direction::BottomToTop => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Global layout settings. One per diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    direction: Direction,
    ranksep: f64,
    nodesep: f64,
}

impl Layout {
    pub const DEFAULT_RANKSEP: f64 = 50.0;
    pub const DEFAULT_NODESEP: f64 = 30.0;

    pub fn new(direction: Direction, ranksep: f64, nodesep: f64) -> Self {
        Self {
            direction,
            ranksep,
            nodesep,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Separation between ranks.
    pub fn ranksep(&self) -> f64 {
        self.ranksep
    }

    /// Separation between nodes of the same rank.
    pub fn nodesep(&self) -> f64 {
        self.nodesep
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(
            Direction::default(),
            Self::DEFAULT_RANKSEP,
            Self::DEFAULT_NODESEP,
        )
    }
}

/// A parsed diagram: layout, styles, entities, and cross references.
///
/// This is the root type of the semantic model. Maps are keyed by id and keep
/// declaration order. A component and a container may share an id; lookups
/// that only care about existence consult both maps
/// ([`Diagram::contains_entity`]).
///
/// A freshly parsed diagram may contain dangling references (relations or
/// annotations naming unknown entities, components naming unknown styles);
/// validation reports them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagram {
    layout: Layout,
    styles: IndexMap<Id, Style>,
    components: IndexMap<Id, Component>,
    containers: IndexMap<Id, Container>,
    relations: Vec<Relation>,
    annotations: IndexMap<Id, Annotation>,
}

impl Diagram {
    /// Create a new Diagram from its parts.
    pub fn new(
        layout: Layout,
        styles: IndexMap<Id, Style>,
        components: IndexMap<Id, Component>,
        containers: IndexMap<Id, Container>,
        relations: Vec<Relation>,
        annotations: IndexMap<Id, Annotation>,
    ) -> Self {
        Self {
            layout,
            styles,
            components,
            containers,
            relations,
            annotations,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn styles(&self) -> &IndexMap<Id, Style> {
        &self.styles
    }

    pub fn components(&self) -> &IndexMap<Id, Component> {
        &self.components
    }

    pub fn containers(&self) -> &IndexMap<Id, Container> {
        &self.containers
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Annotations keyed by their target id.
    pub fn annotations(&self) -> &IndexMap<Id, Annotation> {
        &self.annotations
    }

    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    /// Returns `true` if `id` names a component or a container.
    pub fn contains_entity(&self, id: &str) -> bool {
        self.components.contains_key(id) || self.containers.contains_key(id)
    }

    /// Children of the container `id`, or an empty slice if there is no such container.
    pub fn children_of(&self, id: &str) -> &[Id] {
        self.containers
            .get(id)
            .map(Container::children)
            .unwrap_or_default()
    }

    /// Components that are not nested in any container.
    pub fn top_level_components(&self) -> impl Iterator<Item = &Component> {
        self.components.values().filter(|c| c.parent().is_none())
    }

    /// Containers that are not nested in any other container.
    pub fn top_level_containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.values().filter(|c| c.parent().is_none())
    }

    /// Ids of every top-level component and container, in source order.
    pub fn roots(&self) -> Vec<&Id> {
        let mut roots: Vec<(usize, &Id)> = self
            .top_level_components()
            .map(|c| (c.span().start(), c.id()))
            .chain(
                self.top_level_containers()
                    .map(|c| (c.span().start(), c.id())),
            )
            .collect();
        roots.sort_by_key(|(start, _)| *start);
        roots.into_iter().map(|(_, id)| id).collect()
    }
}
