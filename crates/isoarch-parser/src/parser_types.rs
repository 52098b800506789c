//! Statement tree produced by the [`parser`](super::parser).
//!
//! The tree mirrors the source closely: attribute and property values are kept
//! as raw text and only interpreted by the [`builder`](super::builder).

use isoarch_core::identifier::Id;

use crate::span::Spanned;

/// A `name=value` pair of a `layout` or `style` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute<'src> {
    pub name: Spanned<&'src str>,
    pub value: Spanned<&'src str>,
}

/// A `name value` pair inside a block, e.g. `label "Web"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property<'src> {
    pub name: Spanned<&'src str>,
    pub value: Spanned<&'src str>,
}

/// `component <id> { <property>* }`
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDecl<'src> {
    pub id: Spanned<Id>,
    pub properties: Vec<Property<'src>>,
}

/// `container <id> { (<property> | <statement>)* }`
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerDecl<'src> {
    pub id: Spanned<Id>,
    pub properties: Vec<Property<'src>>,
    /// Nested statements in declaration order.
    pub body: Vec<Spanned<Statement<'src>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'src> {
    Layout {
        attributes: Vec<Attribute<'src>>,
    },
    Style {
        name: Spanned<Id>,
        attributes: Vec<Attribute<'src>>,
    },
    Component(ComponentDecl<'src>),
    Container(ContainerDecl<'src>),
    Relation {
        source: Spanned<Id>,
        target: Spanned<Id>,
        label: Option<Spanned<&'src str>>,
    },
    Annotation {
        target: Spanned<Id>,
        properties: Vec<Property<'src>>,
    },
}

impl Statement<'_> {
    /// The leading keyword of this statement.
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Layout { .. } => "layout",
            Statement::Style { .. } => "style",
            Statement::Component(_) => "component",
            Statement::Container(_) => "container",
            Statement::Relation { .. } => "relation",
            Statement::Annotation { .. } => "annotation",
        }
    }
}
