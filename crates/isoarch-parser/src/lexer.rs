//! Lexical analyzer for Isoarch source text.
//!
//! The lexer converts source text into a flat stream of [`PositionedToken`]s.
//! It is line oriented: every line is trimmed, and blank lines and lines
//! starting with `//` are dropped before any token is matched. A `//` anywhere
//! else is ordinary text.
//!
//! Tokenization never fails. Text that matches no token rule becomes a
//! [`TokenKind::Unknown`] token which the parser rejects with a located error.

use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, delimited, not, repeat, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::Stream as _,
    token::{any, literal, one_of, take_while},
};

use crate::{
    span::Span,
    tokens::{PositionedToken, TokenKind},
};

type Input<'a> = &'a str;
type IResult<O> = ModalResult<O, ContextError>;

/// Characters that always end a bare word or an unknown run.
const STRUCTURAL: [char; 5] = ['{', '}', ':', '=', '"'];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
}

/// Parse the arrow operator `->`
fn arrow<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    literal("->")
        .map(|value| (TokenKind::Arrow, value))
        .parse_next(input)
}

/// Parse a quoted string. No escapes; the closing quote must be on the same line.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    delimited('"', take_while(0.., |c: char| c != '"'), '"')
        .map(|value| (TokenKind::String, value))
        .parse_next(input)
}

/// Parse `{`, `}`, `:` or `=`
fn punctuation<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    one_of(['{', '}', ':', '='])
        .take()
        .map(|value: &str| {
            let kind = match value {
                "{" => TokenKind::LeftBrace,
                "}" => TokenKind::RightBrace,
                ":" => TokenKind::Colon,
                _ => TokenKind::Equals,
            };
            (kind, value)
        })
        .parse_next(input)
}

/// Parse a hex color `#RRGGBB` that is not glued to a longer word.
fn color<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    (
        '#',
        take_while(6, |c: char| c.is_ascii_hexdigit()),
        not(one_of(is_word_char)),
    )
        .take()
        .map(|value| (TokenKind::Color, value))
        .parse_next(input)
}

/// Parse a bare word and classify it.
///
/// A `-` belongs to the word unless it starts an arrow, so `a->b` is three
/// tokens while `api-v2` is one.
fn word<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    repeat::<_, _, (), _, _>(
        1..,
        alt((
            take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.'),
            terminated("-", not('>')),
        )),
    )
    .take()
    .map(|value| (TokenKind::classify(value), value))
    .parse_next(input)
}

/// Anything else: a run of non-structural text, or one stray structural character.
fn unknown<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    alt((
        take_while(1.., |c: char| !c.is_whitespace() && !STRUCTURAL.contains(&c)),
        any.take(),
    ))
    .map(|value| (TokenKind::Unknown, value))
    .parse_next(input)
}

/// Parse a single token (priority order matters)
fn token<'a>(input: &mut Input<'a>) -> IResult<(TokenKind, &'a str)> {
    alt((
        arrow,          // Must come before words, `-` is a word char
        string_literal, // Must come before the stray-quote fallback
        punctuation,
        color,
        word,
        unknown,
    ))
    .parse_next(input)
}

fn whitespace<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(0.., char::is_whitespace).parse_next(input)
}

/// Tokenize one retained line.
///
/// `line_start` is the byte offset of the line in the full source.
fn tokenize_line<'a>(
    line: &'a str,
    line_start: usize,
    line_number: usize,
    tokens: &mut Vec<PositionedToken<'a>>,
) {
    let mut input: Input<'a> = line;

    loop {
        // `take_while(0..)` cannot fail
        let _ = whitespace(&mut input);
        if input.is_empty() {
            break;
        }

        let start = line.len() - input.len();
        let (kind, value) = token(&mut input).unwrap_or_else(|_: ErrMode<ContextError>| {
            let len = input.chars().next().map_or(0, char::len_utf8);
            (TokenKind::Unknown, input.next_slice(len))
        });
        let end = line.len() - input.len();

        let column = line[..start].chars().count() + 1;
        let span = Span::new(line_start + start..line_start + end);
        tokens.push(PositionedToken::new(kind, value, span, line_number, column));
    }
}

/// Tokenize source text.
///
/// Never fails; spans index into `source`, lines and columns are 1-based.
pub fn tokenize(source: &str) -> Vec<PositionedToken<'_>> {
    let mut tokens = Vec::new();
    let mut line_start = 0;

    for (index, raw_line) in source.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let trimmed = line.trim();

        if !trimmed.is_empty() && !trimmed.starts_with("//") {
            tokenize_line(line, line_start, index + 1, &mut tokens);
        }

        line_start += raw_line.len() + 1;
    }

    trace!(count = tokens.len(); "Tokenized source");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn values(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.value).collect()
    }

    #[test]
    fn test_component_statement() {
        let input = r#"component web { label "Web App" type svc }"#;

        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::LeftBrace,
                TokenKind::Property,
                TokenKind::String,
                TokenKind::Property,
                TokenKind::Identifier,
                TokenKind::RightBrace,
            ]
        );
        assert_eq!(
            values(input),
            vec!["component", "web", "{", "label", "Web App", "type", "svc", "}"]
        );
    }

    #[test]
    fn test_arrow_splits_words() {
        assert_eq!(values("a->b"), vec!["a", "->", "b"]);
        assert_eq!(
            kinds("relation api-v2 -> db"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(values("api-v2"), vec!["api-v2"]);
    }

    #[test]
    fn test_attributes() {
        let input = "style db color=#FF0000 shape=cylinder";

        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Property,
                TokenKind::Equals,
                TokenKind::Color,
                TokenKind::Property,
                TokenKind::Equals,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("ranksep=50 nodesep=2.5 x=-3"),
            vec![
                TokenKind::Property,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Property,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_color_requires_six_hex_digits() {
        assert_eq!(kinds("#abcdef"), vec![TokenKind::Color]);
        assert_eq!(kinds("#abc"), vec![TokenKind::Unknown]);
        assert_eq!(kinds("#abcdefa"), vec![TokenKind::Unknown]);
        assert_eq!(kinds("#GGGGGG"), vec![TokenKind::Unknown]);
    }

    #[test]
    fn test_comment_lines_are_dropped() {
        let input = "// heading\n\n   // indented\ncomponent a { }\n";

        let tokens = tokenize(input);
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|t| t.line == 4));
    }

    #[test]
    fn test_trailing_comment_is_not_a_comment() {
        assert_eq!(
            kinds("component a // note"),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = tokenize(r#"label "open"#);

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].value, "\"");
        assert_eq!(tokens[2].value, "open");
    }

    #[test]
    fn test_strings_keep_inner_text_verbatim() {
        let tokens = tokenize(r#"tooltip "a { b } -> c // d""#);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].value, "a { b } -> c // d");
    }

    #[test]
    fn test_unknown_runs() {
        let tokens = tokenize("@home $$ {");

        assert_eq!(values("@home $$ {"), vec!["@home", "$$", "{"]);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[2].kind, TokenKind::LeftBrace);
    }

    #[test]
    fn test_positions() {
        let input = "component a {\n\tlabel \"A\"\r\n}";
        let tokens = tokenize(input);

        let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(positions, vec![(1, 1), (1, 11), (1, 13), (2, 2), (2, 8), (3, 1)]);

        // Spans index the original source, quotes included for strings
        assert_eq!(&input[tokens[4].span.start()..tokens[4].span.end()], "\"A\"");
        assert_eq!(&input[tokens[5].span.start()..tokens[5].span.end()], "}");
    }

    #[test]
    fn test_columns_count_characters() {
        let tokens = tokenize(r#"label "héllo" x"#);

        assert_eq!(tokens[2].value, "x");
        assert_eq!(tokens[2].column, 15);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n  \n\t\n").is_empty());
    }
}
