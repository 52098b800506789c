//! Parser for Isoarch source tokens.
//!
//! This module transforms a token stream from the [`lexer`](super::lexer) into
//! the statement tree defined in [`parser_types`](super::parser_types). The
//! public entry point is [`parse_statements`].
//!
//! Every call runs on its own [`TokenSlice`] cursor, so there is no parser
//! state to reset between calls. Parsing stops at the first error.

use log::{debug, trace};
use winnow::{
    Parser as _,
    combinator::{opt, peek, repeat},
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use isoarch_core::identifier::Id;

use crate::{
    error::{Diagnostic, ErrorCode},
    parser_types as types,
    span::{Span, Spanned},
    tokens::{KEYWORDS, PositionedToken, TokenKind},
};

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// What the parser expected where it stopped
    Expected(&'static str),
    /// The next top-level token starts no statement
    UnknownStatement,
    /// A container opens deeper than [`MAX_NESTING_DEPTH`]
    TooDeep,
}

const CLOSING_BRACE: &str = "`}` closing the block";

/// Containers that may enclose one another, counting the outermost.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Fields the builder reads as numbers. Malformed text such as `12px` is
/// accepted here and falls back to the field's default there.
const NUMERIC_FIELDS: [&str; 4] = ["ranksep", "nodesep", "width", "height"];

/// Keywords that open a `{ ... }` block of their own.
const BLOCK_KEYWORDS: [&str; 3] = ["component", "container", "annotation"];

type Input<'src> = IsoarchTokenSlice<'src>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;
/// Type alias for winnow TokenSlice with our positioned tokens
type IsoarchTokenSlice<'src> = TokenSlice<'src, PositionedToken<'src>>;

/// Which block is being parsed; decides the recognised properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Component,
    Container,
    Annotation,
}

impl BlockKind {
    fn properties(self) -> &'static [&'static str] {
        match self {
            BlockKind::Component | BlockKind::Container => {
                &["label", "type", "style", "width", "height"]
            }
            BlockKind::Annotation => &["tooltip", "link"],
        }
    }
}

/// Parsed contents of a `{ ... }` block.
struct Block<'src> {
    properties: Vec<types::Property<'src>>,
    body: Vec<Spanned<types::Statement<'src>>>,
    close: Span,
}

/// Commit to the current branch: turn a backtrack into a cut.
fn cut_err<'src, O, F>(input: &mut Input<'src>, f: F) -> IResult<O>
where
    F: FnOnce(&mut Input<'src>) -> IResult<O>,
{
    match f(input) {
        Ok(o) => Ok(o),
        Err(ErrMode::Backtrack(e)) => Err(ErrMode::Cut(e)),
        Err(e) => Err(e),
    }
}

/// Look at the next token without consuming it.
fn peek_token<'src>(input: &mut Input<'src>) -> IResult<Option<&'src PositionedToken<'src>>> {
    opt(peek(any)).parse_next(input)
}

/// Consume one token, whatever it is.
fn skip_token<'src>(input: &mut Input<'src>) -> IResult<()> {
    any.void().parse_next(input)
}

/// Consume one token and return its text.
fn token_text<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    any.map(|token: &PositionedToken<'_>| Spanned::new(token.value, token.span))
        .parse_next(input)
}

/// Create a backtrack error for a missing `expected` at the current position.
fn expected_error(expected: &'static str) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::Expected(expected));
    ErrMode::Backtrack(e)
}

/// Parse a single punctuation token of `kind`.
fn punctuation<'src>(
    input: &mut Input<'src>,
    kind: TokenKind,
    expected: &'static str,
) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken<'_>| (token.kind == kind).then_some(token.span))
        .context(Context::Expected(expected))
        .parse_next(input)
}

fn left_brace<'src>(input: &mut Input<'src>) -> IResult<Span> {
    punctuation(input, TokenKind::LeftBrace, "`{`")
}

fn right_brace<'src>(input: &mut Input<'src>) -> IResult<Span> {
    punctuation(input, TokenKind::RightBrace, CLOSING_BRACE)
}

fn arrow<'src>(input: &mut Input<'src>) -> IResult<Span> {
    punctuation(input, TokenKind::Arrow, "`->`")
}

fn colon<'src>(input: &mut Input<'src>) -> IResult<Span> {
    punctuation(input, TokenKind::Colon, "`:`")
}

fn equals<'src>(input: &mut Input<'src>) -> IResult<Span> {
    punctuation(input, TokenKind::Equals, "`=`")
}

/// Parse a raw identifier string with span preservation (low-level)
///
/// Property names are accepted too, so an entity may be called `label`.
fn raw_identifier<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    any.verify_map(|token: &PositionedToken<'_>| {
        token
            .is_identifier_like()
            .then(|| Spanned::new(token.value, token.span))
    })
    .context(Context::Expected("identifier"))
    .parse_next(input)
}

/// Parse an identifier with span preservation (high-level)
fn identifier<'src>(input: &mut Input<'src>) -> IResult<Spanned<Id>> {
    let raw = raw_identifier.parse_next(input)?;
    Ok(raw.map(|name| Id::new(name)))
}

/// Parse the value of `field`: string, identifier, property name, number or
/// color. Numeric fields also take unknown tokens.
fn attribute_value<'src>(
    input: &mut Input<'src>,
    field: &str,
    expected: &'static str,
) -> IResult<Spanned<&'src str>> {
    let numeric = NUMERIC_FIELDS.contains(&field);

    any.verify_map(move |token: &PositionedToken<'_>| match token.kind {
        TokenKind::String
        | TokenKind::Identifier
        | TokenKind::Property
        | TokenKind::Number
        | TokenKind::Color => Some(Spanned::new(token.value, token.span)),
        TokenKind::Unknown if numeric => Some(Spanned::new(token.value, token.span)),
        _ => None,
    })
    .context(Context::Expected(expected))
    .parse_next(input)
}

/// Parse `name =`, the lookahead that starts an attribute.
fn attribute_name<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    let name = raw_identifier.parse_next(input)?;
    equals.parse_next(input)?;
    Ok(name)
}

/// Parse a single `name=value` attribute
fn attribute<'src>(input: &mut Input<'src>) -> IResult<types::Attribute<'src>> {
    let name = attribute_name.parse_next(input)?;

    // After `=`, a value is mandatory
    cut_err(input, |input| {
        let value = attribute_value(input, name.inner(), "attribute value")?;
        Ok(types::Attribute { name, value })
    })
}

/// Parse attributes up to the first token that is not `name =`.
fn attributes<'src>(input: &mut Input<'src>) -> IResult<Vec<types::Attribute<'src>>> {
    repeat(0.., attribute).parse_next(input)
}

/// Parse a block property: `label "text"`, `type svc`, `width 120`, ...
fn property<'src>(input: &mut Input<'src>) -> IResult<types::Property<'src>> {
    let name = token_text(input)?;

    let value = match *name.inner() {
        "type" | "style" => raw_identifier.parse_next(input)?,
        "label" => attribute_value(input, "label", "label value")?,
        "tooltip" => attribute_value(input, "tooltip", "tooltip value")?,
        "link" => attribute_value(input, "link", "link value")?,
        field => attribute_value(input, field, "property value")?,
    };

    Ok(types::Property { name, value })
}

/// Returns `true` if `style <id> <name> =` follows, i.e. a nested style
/// statement rather than the `style` property.
fn nested_style_ahead<'src>(input: &mut Input<'src>) -> bool {
    let checkpoint = input.checkpoint();
    let ahead = (skip_token, raw_identifier, attribute_name)
        .parse_next(input)
        .is_ok();
    input.reset(&checkpoint);
    ahead
}

/// Parse a `{ ... }` block whose nested statements sit `depth` containers deep.
///
/// Recognised properties are collected, nested statements are parsed inside
/// container blocks, and every other token is skipped. A block keyword inside
/// a component or annotation block is an error, since its `}` would close the
/// enclosing block.
fn block<'src>(input: &mut Input<'src>, kind: BlockKind, depth: usize) -> IResult<Block<'src>> {
    left_brace.parse_next(input)?;

    let mut properties = Vec::new();
    let mut body = Vec::new();

    loop {
        let Some(token) = peek_token(input)? else {
            return Err(expected_error(CLOSING_BRACE));
        };

        match token.kind {
            TokenKind::RightBrace => {
                let close = right_brace.parse_next(input)?;
                return Ok(Block {
                    properties,
                    body,
                    close,
                });
            }
            TokenKind::Keyword if kind == BlockKind::Container && token.value != "style" => {
                body.push(statement(input, depth)?);
            }
            TokenKind::Keyword
                if kind == BlockKind::Container
                    && token.value == "style"
                    && nested_style_ahead(input) =>
            {
                body.push(statement(input, depth)?);
            }
            TokenKind::Keyword if BLOCK_KEYWORDS.contains(&token.value) => {
                return Err(expected_error("property or `}` closing the block"));
            }
            TokenKind::Property | TokenKind::Keyword
                if kind.properties().contains(&token.value) =>
            {
                properties.push(property(input)?);
            }
            _ => {
                trace!(token = token.value, line = token.line; "Skipping token in block");
                skip_token(input)?;
            }
        }
    }
}

/// `layout <name=value>*`
fn layout_statement<'src>(
    input: &mut Input<'src>,
    keyword: Span,
) -> IResult<Spanned<types::Statement<'src>>> {
    let attributes = attributes.parse_next(input)?;
    let span = attributes
        .last()
        .map_or(keyword, |last| keyword.union(last.value.span()));

    Ok(Spanned::new(types::Statement::Layout { attributes }, span))
}

/// `style <id> <name=value>*`
fn style_statement<'src>(
    input: &mut Input<'src>,
    keyword: Span,
) -> IResult<Spanned<types::Statement<'src>>> {
    let name = identifier.parse_next(input)?;
    let attributes = attributes.parse_next(input)?;
    let span = attributes
        .last()
        .map_or(keyword.union(name.span()), |last| {
            keyword.union(last.value.span())
        });

    Ok(Spanned::new(
        types::Statement::Style { name, attributes },
        span,
    ))
}

/// `component <id> { <property>* }`
fn component_statement<'src>(
    input: &mut Input<'src>,
    keyword: Span,
) -> IResult<Spanned<types::Statement<'src>>> {
    let id = identifier.parse_next(input)?;
    let Block {
        properties, close, ..
    } = block(input, BlockKind::Component, 0)?;

    Ok(Spanned::new(
        types::Statement::Component(types::ComponentDecl { id, properties }),
        keyword.union(close),
    ))
}

/// `container <id> { (<property> | <statement>)* }`
fn container_statement<'src>(
    input: &mut Input<'src>,
    keyword: Span,
    depth: usize,
) -> IResult<Spanned<types::Statement<'src>>> {
    let id = identifier.parse_next(input)?;
    let Block {
        properties,
        body,
        close,
    } = block(input, BlockKind::Container, depth + 1)?;

    Ok(Spanned::new(
        types::Statement::Container(types::ContainerDecl {
            id,
            properties,
            body,
        }),
        keyword.union(close),
    ))
}

/// The quoted label after `:` in a relation.
fn relation_label<'src>(input: &mut Input<'src>) -> IResult<Spanned<&'src str>> {
    any.verify_map(|token: &PositionedToken<'_>| {
        (token.kind == TokenKind::String).then(|| Spanned::new(token.value, token.span))
    })
    .context(Context::Expected("quoted relation label"))
    .parse_next(input)
}

/// `relation <id> -> <id> [: "<label>"]`
fn relation_statement<'src>(
    input: &mut Input<'src>,
    keyword: Span,
) -> IResult<Spanned<types::Statement<'src>>> {
    let source = identifier.parse_next(input)?;
    arrow.parse_next(input)?;
    let target = identifier.parse_next(input)?;

    let label = match opt(colon).parse_next(input)? {
        Some(_) => Some(relation_label(input)?),
        None => None,
    };

    let end = label.as_ref().map_or(target.span(), |label| label.span());
    Ok(Spanned::new(
        types::Statement::Relation {
            source,
            target,
            label,
        },
        keyword.union(end),
    ))
}

/// `annotation <id> { <property>* }`
fn annotation_statement<'src>(
    input: &mut Input<'src>,
    keyword: Span,
) -> IResult<Spanned<types::Statement<'src>>> {
    let target = identifier.parse_next(input)?;
    let Block {
        properties, close, ..
    } = block(input, BlockKind::Annotation, 0)?;

    Ok(Spanned::new(
        types::Statement::Annotation { target, properties },
        keyword.union(close),
    ))
}

/// Parse one statement inside `depth` containers, dispatching on its keyword.
fn statement<'src>(
    input: &mut Input<'src>,
    depth: usize,
) -> IResult<Spanned<types::Statement<'src>>> {
    let keyword = match peek_token(input)? {
        Some(token) if token.kind == TokenKind::Keyword && KEYWORDS.contains(&token.value) => {
            token
        }
        _ => {
            let mut e = ContextError::new();
            e.push(Context::UnknownStatement);
            return Err(ErrMode::Cut(e));
        }
    };

    if keyword.value == "container" && depth >= MAX_NESTING_DEPTH {
        let mut e = ContextError::new();
        e.push(Context::TooDeep);
        return Err(ErrMode::Cut(e));
    }
    skip_token(input)?;

    // After the keyword, commit to the statement
    cut_err(input, |input| match keyword.value {
        "layout" => layout_statement(input, keyword.span),
        "style" => style_statement(input, keyword.span),
        "component" => component_statement(input, keyword.span),
        "container" => container_statement(input, keyword.span, depth),
        "relation" => relation_statement(input, keyword.span),
        _ => annotation_statement(input, keyword.span),
    })
}

/// Parse statements until the input is exhausted.
fn statements<'src>(input: &mut Input<'src>) -> IResult<Vec<Spanned<types::Statement<'src>>>> {
    let mut statements = Vec::new();
    while !input.is_empty() {
        statements.push(statement(input, 0)?);
    }
    Ok(statements)
}

/// Convert a winnow error to a located diagnostic.
///
/// `current_remaining` is the number of unconsumed tokens at the failure, so
/// the offending token is `tokens[tokens.len() - current_remaining]`, or the
/// end of input if nothing remains.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken<'_>],
    current_remaining: usize,
) -> Diagnostic {
    let contexts: Vec<Context> = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().cloned().collect(),
        // Not produced on complete input
        ErrMode::Incomplete(_) => Vec::new(),
    };

    let expected = contexts
        .iter()
        .find_map(|ctx| match ctx {
            Context::Expected(what) => Some(*what),
            Context::UnknownStatement | Context::TooDeep => None,
        })
        .unwrap_or("a statement");

    match tokens.get(tokens.len() - current_remaining) {
        Some(token) if contexts.contains(&Context::TooDeep) => Diagnostic::error(format!(
            "containers nested more than {MAX_NESTING_DEPTH} deep at line {}, column {}",
            token.line, token.column
        ))
        .with_code(ErrorCode::E104)
        .with_label(token.span, "nested too deeply")
        .with_help("flatten the hierarchy or move part of it into its own top-level container"),
        Some(token) if contexts.contains(&Context::UnknownStatement) => {
            Diagnostic::error(format!(
                "unknown statement: found {token}; expected one of {}",
                KEYWORDS.join(", ")
            ))
            .with_code(ErrorCode::E102)
            .with_label(token.span, "not a statement keyword")
            .with_help("statements start with `layout`, `style`, `component`, `container`, `relation` or `annotation`")
        }
        Some(token) => Diagnostic::error(format!("expected {expected}, found {token}"))
            .with_code(ErrorCode::E100)
            .with_label(token.span, format!("expected {expected}"))
            .with_help("check syntax and token positioning"),
        None => {
            let span = tokens.last().map(|t| t.span).unwrap_or_default();
            Diagnostic::error(format!(
                "unexpected end of input (EOF): expected {expected}"
            ))
            .with_code(ErrorCode::E101)
            .with_label(span, "input ends after this token")
            .with_help("the statement is incomplete; check for a missing `}` or value")
        }
    }
}

/// Parse a token stream into statements
pub fn parse_statements<'src>(
    tokens: &'src [PositionedToken<'src>],
) -> Result<Vec<Spanned<types::Statement<'src>>>, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    match statements(&mut token_slice) {
        Ok(statements) => {
            debug!(statements = statements.len(); "Parsed statements");
            Ok(statements)
        }
        Err(e) => {
            let current_remaining = token_slice.eof_offset();
            Err(convert_error(e, tokens, current_remaining))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse(input: &'static str) -> Result<Vec<types::Statement<'static>>, Diagnostic> {
        // Leak the tokens so statements can borrow them for the test's duration
        let tokens: &'static [PositionedToken<'static>] = Vec::leak(tokenize(input));
        parse_statements(tokens).map(|statements| {
            statements
                .into_iter()
                .map(Spanned::into_inner)
                .collect()
        })
    }

    fn parse_err(input: &'static str) -> Diagnostic {
        parse(input).expect_err("input should not parse")
    }

    #[test]
    fn test_raw_identifier_accepts_property_names() {
        let tokens = tokenize("label");
        let mut slice = TokenSlice::new(&tokens);
        let result = raw_identifier.parse_next(&mut slice);
        assert_eq!(*result.unwrap().inner(), "label");

        let tokens = tokenize("component");
        let mut slice = TokenSlice::new(&tokens);
        assert!(raw_identifier.parse_next(&mut slice).is_err());
    }

    #[test]
    fn test_attributes_stop_at_non_attribute() {
        let tokens = tokenize("direction=LR ranksep=80 component");
        let mut slice = TokenSlice::new(&tokens);

        let attrs = attributes.parse_next(&mut slice).unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(*attrs[0].name.inner(), "direction");
        assert_eq!(*attrs[1].value.inner(), "80");
        // The keyword is left for the next statement
        assert_eq!(slice.eof_offset(), 1);
    }

    #[test]
    fn test_attribute_without_equals_ends_list() {
        let tokens = tokenize("icon server");
        let mut slice = TokenSlice::new(&tokens);

        let attrs = attributes.parse_next(&mut slice).unwrap();
        assert!(attrs.is_empty());
        assert_eq!(slice.eof_offset(), 2);
    }

    #[test]
    fn test_layout_statement() {
        let statements = parse("layout direction=LR ranksep=80 nodesep=\"40\"").unwrap();

        let [types::Statement::Layout { attributes }] = statements.as_slice() else {
            panic!("expected a single layout statement, got {statements:?}");
        };
        assert_eq!(attributes.len(), 3);
        assert_eq!(*attributes[2].value.inner(), "40");
    }

    #[test]
    fn test_empty_layout_statement() {
        let statements = parse("layout").unwrap();
        assert_eq!(
            statements,
            vec![types::Statement::Layout {
                attributes: Vec::new()
            }]
        );
    }

    #[test]
    fn test_component_statement() {
        let statements = parse("component web { label \"Web App\" type svc width 120 }").unwrap();

        let [types::Statement::Component(decl)] = statements.as_slice() else {
            panic!("expected a component, got {statements:?}");
        };
        assert_eq!(*decl.id.inner(), "web");
        let props: Vec<_> = decl
            .properties
            .iter()
            .map(|p| (*p.name.inner(), *p.value.inner()))
            .collect();
        assert_eq!(
            props,
            vec![("label", "Web App"), ("type", "svc"), ("width", "120")]
        );
    }

    #[test]
    fn test_component_skips_unknown_tokens() {
        let statements = parse("component a { shiny 42 \"x\" label \"A\" : = }").unwrap();

        let [types::Statement::Component(decl)] = statements.as_slice() else {
            panic!("expected a component, got {statements:?}");
        };
        assert_eq!(decl.properties.len(), 1);
        assert_eq!(*decl.properties[0].value.inner(), "A");
    }

    #[test]
    fn test_container_nesting() {
        let input = r#"
            container outer {
                label "Outer"
                component a { }
                container inner {
                    component b { }
                }
            }
        "#;
        let statements = parse(input).unwrap();

        let [types::Statement::Container(outer)] = statements.as_slice() else {
            panic!("expected a container, got {statements:?}");
        };
        assert_eq!(outer.properties.len(), 1);
        assert_eq!(outer.body.len(), 2);
        let types::Statement::Container(inner) = outer.body[1].inner() else {
            panic!("expected nested container");
        };
        assert_eq!(*inner.id.inner(), "inner");
        assert_eq!(inner.body.len(), 1);
    }

    #[test]
    fn test_style_in_container_block() {
        let input = r#"
            container c {
                style svc
                style nested color=#FF0000
            }
        "#;
        let statements = parse(input).unwrap();

        let [types::Statement::Container(decl)] = statements.as_slice() else {
            panic!("expected a container, got {statements:?}");
        };
        assert_eq!(decl.properties.len(), 1);
        assert_eq!(*decl.properties[0].value.inner(), "svc");
        assert_eq!(decl.body.len(), 1);
        assert_eq!(decl.body[0].keyword(), "style");
    }

    #[test]
    fn test_relation_statement() {
        let statements = parse("relation a -> b : \"calls\"\nrelation b -> c").unwrap();

        assert_eq!(statements.len(), 2);
        let types::Statement::Relation {
            source,
            target,
            label,
        } = &statements[0]
        else {
            panic!("expected relation");
        };
        assert_eq!(*source.inner(), "a");
        assert_eq!(*target.inner(), "b");
        assert_eq!(label.as_ref().map(|l| *l.inner()), Some("calls"));

        let types::Statement::Relation { label, .. } = &statements[1] else {
            panic!("expected relation");
        };
        assert!(label.is_none());
    }

    #[test]
    fn test_annotation_statement() {
        let statements =
            parse("annotation web { tooltip \"Front\" link \"https://x.io\" label \"ignored\" }")
                .unwrap();

        let [types::Statement::Annotation { target, properties }] = statements.as_slice() else {
            panic!("expected an annotation, got {statements:?}");
        };
        assert_eq!(*target.inner(), "web");
        assert_eq!(properties.len(), 2);
    }

    #[test]
    fn test_statement_spans() {
        let tokens = tokenize("component a { label \"A\" }\nrelation a -> b");
        let statements = parse_statements(&tokens).unwrap();

        assert_eq!(statements[0].span(), Span::new(0..25));
        assert_eq!(statements[1].span(), Span::new(26..41));
    }

    #[test]
    fn test_error_unknown_statement() {
        let err = parse_err("component a { }\nwidget b { }");

        assert_eq!(err.code(), Some(ErrorCode::E102));
        assert!(
            err.message().contains("identifier 'widget' at line 2, column 1"),
            "{}",
            err.message()
        );
    }

    #[test]
    fn test_error_keyword_as_identifier() {
        let err = parse_err("component container { }");

        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(
            err.message(),
            "expected identifier, found keyword 'container' at line 1, column 11"
        );
    }

    #[test]
    fn test_error_missing_brace_at_eof() {
        let err = parse_err("component a { label \"A\"");

        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert_eq!(
            err.message(),
            "unexpected end of input (EOF): expected `}` closing the block"
        );
    }

    #[test]
    fn test_error_missing_property_value() {
        let err = parse_err("component a { label }");

        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(
            err.message(),
            "expected label value, found right brace '}' at line 1, column 21"
        );

        let err = parse_err("component a { type");
        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert!(err.message().ends_with("expected identifier"));
    }

    #[test]
    fn test_error_relation_label_must_be_string() {
        let err = parse_err("relation a -> b : calls");

        assert_eq!(
            err.message(),
            "expected quoted relation label, found identifier 'calls' at line 1, column 19"
        );
    }

    #[test]
    fn test_error_relation_missing_arrow() {
        let err = parse_err("relation a b");

        assert_eq!(
            err.message(),
            "expected `->`, found identifier 'b' at line 1, column 12"
        );
    }

    #[test]
    fn test_error_invalid_attribute_value() {
        let err = parse_err("style s color={");

        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert!(err.message().starts_with("expected attribute value, found left brace"));
    }

    #[test]
    fn test_numeric_fields_take_unknown_tokens() {
        let tokens = tokenize("ranksep=12px nodesep=1e3");
        let mut slice = TokenSlice::new(&tokens);

        let attrs = attributes.parse_next(&mut slice).unwrap();
        assert_eq!(*attrs[0].value.inner(), "12px");
        assert_eq!(*attrs[1].value.inner(), "1e3");

        let statements = parse("component a { width 12px label \"A\" }").unwrap();
        let [types::Statement::Component(decl)] = statements.as_slice() else {
            panic!("expected a component, got {statements:?}");
        };
        assert_eq!(*decl.properties[0].value.inner(), "12px");
        assert_eq!(*decl.properties[1].value.inner(), "A");
    }

    #[test]
    fn test_error_unknown_token_for_label() {
        let err = parse_err("component a { label 12px }");

        assert_eq!(
            err.message(),
            "expected label value, found unknown '12px' at line 1, column 21"
        );
    }

    #[test]
    fn test_error_unknown_token_at_top_level() {
        let err = parse_err("\"orphan\"");

        assert_eq!(err.code(), Some(ErrorCode::E102));
        assert_eq!(err.labels()[0].span(), Span::new(0..8));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("// only a comment").unwrap().is_empty());
    }
}
