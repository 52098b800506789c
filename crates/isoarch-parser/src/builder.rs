//! Model building phase.
//!
//! This module turns the statement tree from the [`parser`](super::parser)
//! into a [`Diagram`]. Attribute and property values are interpreted here;
//! malformed values fall back to defaults with a warning instead of failing.
//!
//! Containers are registered in the container map as soon as their header is
//! processed, before their body. The builder keeps a stack of container
//! handles (indices into that map) for the blocks it is inside, and nested
//! declarations attach to the innermost one through its handle.

use indexmap::IndexMap;
use log::{debug, trace, warn};

use isoarch_core::{
    identifier::Id,
    semantic::{
        Annotation, Component, Container, Diagram, Direction, Layout, Relation, Shape, Size, Style,
    },
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    parser_types::{Attribute, ComponentDecl, ContainerDecl, Property, Statement},
    span::{Span, Spanned},
};

/// Label, style reference and size shared by components and containers.
struct EntityProperties {
    label: Option<String>,
    style: Option<Id>,
    size: Size,
}

impl EntityProperties {
    fn from_properties(properties: &[Property<'_>], default_size: Size) -> Self {
        let mut label = None;
        let mut style = None;
        let mut width = default_size.width();
        let mut height = default_size.height();

        for property in properties {
            let value = *property.value.inner();
            match *property.name.inner() {
                "label" => label = Some(value.to_string()),
                // `type` and `style` are synonyms, the last one wins
                "type" | "style" => style = Some(Id::new(value)),
                "width" => width = dimension(&property.value, "width", width),
                "height" => height = dimension(&property.value, "height", height),
                name => trace!(property = name; "Ignoring block property"),
            }
        }

        Self {
            label,
            style,
            size: Size::new(width, height),
        }
    }
}

/// Parse a number, falling back to `fallback` with a warning.
fn number(value: &Spanned<&str>, name: &str, fallback: f64) -> f64 {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => {
            warn!(
                attribute = name,
                value = *value.inner(),
                fallback;
                "Invalid number, using default",
            );
            fallback
        }
    }
}

/// Parse a positive size, falling back to `fallback` with a warning.
fn dimension(value: &Spanned<&str>, name: &str, fallback: f64) -> f64 {
    let n = number(value, name, fallback);
    if n > 0.0 {
        n
    } else {
        warn!(attribute = name, value = n, fallback; "Size must be positive, using default");
        fallback
    }
}

pub struct Builder {
    layout: Option<Layout>,
    styles: IndexMap<Id, Style>,
    components: IndexMap<Id, Component>,
    containers: IndexMap<Id, Container>,
    relations: Vec<Relation>,
    annotations: IndexMap<Id, Annotation>,
    /// Handles of the enclosing containers, innermost last.
    ancestors: Vec<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            layout: None,
            styles: IndexMap::new(),
            components: IndexMap::new(),
            containers: IndexMap::new(),
            relations: Vec::new(),
            annotations: IndexMap::new(),
            ancestors: Vec::new(),
        }
    }

    pub fn build(mut self, statements: &[Spanned<Statement<'_>>]) -> Result<Diagram> {
        debug!(statements = statements.len(); "Building diagram");

        for statement in statements {
            self.build_statement(statement)?;
        }

        debug!(
            styles = self.styles.len(),
            components = self.components.len(),
            containers = self.containers.len(),
            relations = self.relations.len(),
            annotations = self.annotations.len();
            "Diagram built",
        );

        Ok(Diagram::new(
            self.layout.unwrap_or_default(),
            self.styles,
            self.components,
            self.containers,
            self.relations,
            self.annotations,
        ))
    }

    // ============================================================================
    // Statements
    // ============================================================================

    fn build_statement(&mut self, statement: &Spanned<Statement<'_>>) -> Result<()> {
        let span = statement.span();
        match statement.inner() {
            Statement::Component(decl) => self.build_component(decl, span),
            Statement::Container(decl) => self.build_container(decl, span),
            // Only components and containers nest
            other if !self.ancestors.is_empty() => {
                warn!(
                    statement = other.keyword(),
                    offset = span.start();
                    "Ignoring statement inside container block",
                );
                Ok(())
            }
            Statement::Layout { attributes } => {
                self.build_layout(attributes);
                Ok(())
            }
            Statement::Style { name, attributes } => {
                self.build_style(name, attributes);
                Ok(())
            }
            Statement::Relation {
                source,
                target,
                label,
            } => {
                self.relations.push(Relation::new(
                    source.inner().clone(),
                    target.inner().clone(),
                    label.as_ref().map(|label| label.inner().to_string()),
                    span,
                ));
                Ok(())
            }
            Statement::Annotation { target, properties } => {
                self.build_annotation(target, properties, span);
                Ok(())
            }
        }
    }

    fn build_layout(&mut self, attributes: &[Attribute<'_>]) {
        if self.layout.is_some() {
            warn!("Layout redeclared, the last declaration wins");
        }

        let mut direction = Direction::default();
        let mut ranksep = Layout::DEFAULT_RANKSEP;
        let mut nodesep = Layout::DEFAULT_NODESEP;

        for attr in attributes {
            match *attr.name.inner() {
                "direction" => {
                    direction = attr.value.parse().unwrap_or_else(|_| {
                        warn!(value = *attr.value.inner(); "Unknown layout direction, using TB");
                        Direction::default()
                    })
                }
                "ranksep" => ranksep = number(&attr.value, "ranksep", Layout::DEFAULT_RANKSEP),
                "nodesep" => nodesep = number(&attr.value, "nodesep", Layout::DEFAULT_NODESEP),
                name => debug!(attribute = name; "Ignoring unknown layout attribute"),
            }
        }

        self.layout = Some(Layout::new(direction, ranksep, nodesep));
    }

    fn build_style(&mut self, name: &Spanned<Id>, attributes: &[Attribute<'_>]) {
        let mut style = Style::new(name.inner().clone());

        for attr in attributes {
            let value = *attr.value.inner();
            match *attr.name.inner() {
                "icon" => style.set_icon(value),
                "color" => style.set_color(value),
                "image" => style.set_image(value),
                "shape" => style.set_shape(value.parse().unwrap_or_else(|_| {
                    warn!(style = name.as_str(), value; "Unknown shape, using rectangle");
                    Shape::default()
                })),
                other => style.set_property(other, value),
            }
        }

        if self.styles.insert(name.inner().clone(), style).is_some() {
            warn!(style = name.as_str(); "Style redeclared, the last declaration wins");
        }
    }

    fn build_annotation(&mut self, target: &Spanned<Id>, properties: &[Property<'_>], span: Span) {
        let mut annotation = Annotation::new(target.inner().clone(), span);

        for property in properties {
            let value = *property.value.inner();
            match *property.name.inner() {
                "tooltip" => annotation.set_tooltip(value),
                "link" => annotation.set_link(value),
                name => trace!(property = name; "Ignoring annotation property"),
            }
        }

        if self
            .annotations
            .insert(target.inner().clone(), annotation)
            .is_some()
        {
            warn!(target = target.as_str(); "Annotation redeclared, the last declaration wins");
        }
    }

    fn build_component(&mut self, decl: &ComponentDecl<'_>, span: Span) -> Result<()> {
        let id = decl.id.inner().clone();
        let props = EntityProperties::from_properties(&decl.properties, Size::COMPONENT);

        let mut component = Component::new(id.clone(), span);
        if let Some(label) = props.label {
            component.set_label(label);
        }
        if let Some(style) = props.style {
            component.set_style(style);
        }
        component.set_size(props.size);

        let previous_parent = self.components.get(&id).and_then(|c| c.parent().cloned());
        self.detach(&id, previous_parent);

        if let Some(parent) = self.innermost_container(span)? {
            parent.push_child(id.clone());
            component.set_parent(parent.id().clone());
        }

        trace!(id = id.as_str(), parent:? = component.parent(); "Registered component");
        if self.components.insert(id.clone(), component).is_some() {
            warn!(id = id.as_str(); "Component redeclared, the last declaration wins");
        }
        Ok(())
    }

    fn build_container(&mut self, decl: &ContainerDecl<'_>, span: Span) -> Result<()> {
        let id = decl.id.inner();

        if let Some(enclosing) = self.enclosing_span(id) {
            return Err(
                Diagnostic::error(format!("container '{id}' is nested inside itself"))
                    .with_code(ErrorCode::E103)
                    .with_label(decl.id.span(), "nested declaration")
                    .with_secondary_label(enclosing, "enclosing container declared here")
                    .with_help("a container cannot be its own ancestor; rename one of them"),
            );
        }

        let props = EntityProperties::from_properties(&decl.properties, Size::CONTAINER);

        let mut container = Container::new(id.clone(), span);
        if let Some(label) = props.label {
            container.set_label(label);
        }
        if let Some(style) = props.style {
            container.set_style(style);
        }
        container.set_size(props.size);

        // A redeclaration keeps the earlier children, whose `parent` still names it
        let (previous_parent, previous_children) = self
            .containers
            .get_mut(id)
            .map(|c| (c.parent().cloned(), c.take_children()))
            .unwrap_or_default();
        self.detach(id, previous_parent);
        for child in previous_children {
            container.push_child(child);
        }

        if let Some(parent) = self.innermost_container(span)? {
            parent.push_child(id.clone());
            container.set_parent(parent.id().clone());
        }

        // Register before the body so nested declarations can attach to it
        let (handle, previous) = self.containers.insert_full(id.clone(), container);
        if previous.is_some() {
            warn!(id = id.as_str(); "Container redeclared, the last declaration wins and keeps its children");
        }
        trace!(id = id.as_str(), handle; "Registered container");

        self.ancestors.push(handle);
        let result = decl
            .body
            .iter()
            .try_for_each(|statement| self.build_statement(statement));
        self.ancestors.pop();

        result
    }

    // ============================================================================
    // Handles
    // ============================================================================

    /// The container whose block is being built, if any.
    fn innermost_container(&mut self, span: Span) -> Result<Option<&mut Container>> {
        let Some(&handle) = self.ancestors.last() else {
            return Ok(None);
        };

        match self.containers.get_index_mut(handle) {
            Some((_, container)) => Ok(Some(container)),
            None => Err(Diagnostic::error(format!(
                "enclosing container handle {handle} does not resolve"
            ))
            .with_code(ErrorCode::E900)
            .with_label(span, "declared inside an unregistered container")
            .with_help("this is a bug in the parser, please report it")),
        }
    }

    /// Remove `id` from the children of `parent`, where an earlier
    /// declaration attached it.
    fn detach(&mut self, id: &Id, parent: Option<Id>) {
        let Some(parent) = parent else {
            return;
        };
        if let Some(container) = self.containers.get_mut(&parent) {
            if container.remove_child(id) {
                debug!(id = id.as_str(), parent = parent.as_str(); "Detached redeclared entity");
            }
        }
    }

    /// Span of the enclosing container named `id`, if there is one.
    fn enclosing_span(&self, id: &Id) -> Option<Span> {
        self.ancestors
            .iter()
            .filter_map(|&handle| self.containers.get_index(handle))
            .find(|(ancestor, _)| *ancestor == id)
            .map(|(_, container)| container.span())
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
