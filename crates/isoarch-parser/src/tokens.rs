//! Token types produced by the [`lexer`](super::lexer).

use std::fmt;

use crate::span::Span;

/// Statement keywords, in dispatch order.
pub const KEYWORDS: [&str; 6] = [
    "layout",
    "style",
    "component",
    "container",
    "relation",
    "annotation",
];

/// Reserved property names. `style` is absent: it lexes as a keyword.
pub const PROPERTIES: [&str; 13] = [
    "label",
    "type",
    "tooltip",
    "link",
    "icon",
    "color",
    "image",
    "shape",
    "direction",
    "ranksep",
    "nodesep",
    "width",
    "height",
];

/// Token kinds for the Isoarch language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Property,
    Identifier,
    Number,
    /// Quoted text; the token value excludes the quotes.
    String,
    /// `#` followed by six hex digits.
    Color,
    Arrow,
    LeftBrace,
    RightBrace,
    Colon,
    Equals,
    /// Anything the tokenizer could not classify.
    Unknown,
}

impl TokenKind {
    /// Classify a bare word: keywords, then properties, numbers and identifiers.
    pub fn classify(word: &str) -> Self {
        if KEYWORDS.contains(&word) {
            TokenKind::Keyword
        } else if PROPERTIES.contains(&word) {
            TokenKind::Property
        } else if is_number(word) {
            TokenKind::Number
        } else if is_identifier(word) {
            TokenKind::Identifier
        } else {
            TokenKind::Unknown
        }
    }

    /// Lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Property => "property",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Color => "color",
            TokenKind::Arrow => "arrow",
            TokenKind::LeftBrace => "left brace",
            TokenKind::RightBrace => "right brace",
            TokenKind::Colon => "colon",
            TokenKind::Equals => "equals",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[+-]?digits[.digits]` or `[+-]?.digits`, and parsable as `f64`.
fn is_number(word: &str) -> bool {
    let unsigned = word.strip_prefix(|c| c == '+' || c == '-').unwrap_or(word);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let shape_ok = match frac {
        Some(frac) => digits(int) && !frac.is_empty() && digits(frac),
        None => !int.is_empty() && digits(int),
    };
    shape_ok && word.parse::<f64>().is_ok()
}

/// `[A-Za-z_][A-Za-z0-9_.-]*`
fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// A token with position information, consumed through a winnow `TokenSlice`.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub kind: TokenKind,
    /// Token text. Borrowed from the source; strings exclude their quotes.
    pub value: &'src str,
    pub span: Span,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl<'src> PositionedToken<'src> {
    pub fn new(kind: TokenKind, value: &'src str, span: Span, line: usize, column: usize) -> Self {
        Self {
            kind,
            value,
            span,
            line,
            column,
        }
    }

    /// Returns `true` for the keyword `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == keyword
    }

    /// Returns `true` if the token may name an entity or style.
    pub fn is_identifier_like(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Property)
    }
}

impl fmt::Display for PositionedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at line {}, column {}",
            self.kind, self.value, self.line, self.column
        )
    }
}
