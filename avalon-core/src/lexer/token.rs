//! Token definitions
//!
//! The closed set of token kinds produced by the scanner.

use super::types::Span;
use serde::Serialize;
use std::fmt;

/// Token kind
///
/// `Colon` and `StringLiteral` are reserved: they are part of the
/// taxonomy but no scanning rule currently produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Error / state
    Illegal,
    EndOfInput,

    // Identifiers and literals
    Identifier,
    IntegerLiteral,
    StringLiteral,

    // Operators
    Assign,
    Plus,

    // Delimiters
    Comma,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Colon,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,

    // Note keywords
    Note,
    Tag,
    Content,
    Link,
}

impl TokenKind {
    /// Every kind, in declaration order
    pub const ALL: [TokenKind; 25] = [
        TokenKind::Illegal,
        TokenKind::EndOfInput,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::StringLiteral,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Colon,
        TokenKind::Function,
        TokenKind::Let,
        TokenKind::True,
        TokenKind::False,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::Note,
        TokenKind::Tag,
        TokenKind::Content,
        TokenKind::Link,
    ];

    /// Display name of the kind
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Assign => "Assign",
            TokenKind::Plus => "Plus",
            TokenKind::Comma => "Comma",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Colon => "Colon",
            TokenKind::Function => "Function",
            TokenKind::Let => "Let",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::Return => "Return",
            TokenKind::Note => "Note",
            TokenKind::Tag => "Tag",
            TokenKind::Content => "Content",
            TokenKind::Link => "Link",
        }
    }

    /// Fixed spelling of symbol and keyword kinds
    ///
    /// Kinds whose text varies (identifiers, literals, illegal characters,
    /// end of input) return `None`.
    pub const fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::Colon => Some(":"),
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            TokenKind::Note => Some("note"),
            TokenKind::Tag => Some("tag"),
            TokenKind::Content => Some("content"),
            TokenKind::Link => Some("link"),
            TokenKind::Illegal
            | TokenKind::EndOfInput
            | TokenKind::Identifier
            | TokenKind::IntegerLiteral
            | TokenKind::StringLiteral => None,
        }
    }

    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::Note
                | TokenKind::Tag
                | TokenKind::Content
                | TokenKind::Link
        )
    }

    /// Declared but never emitted by the scanner
    pub const fn is_reserved(&self) -> bool {
        matches!(self, TokenKind::Colon | TokenKind::StringLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit
///
/// `text` is the exact source slice covered by `span`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    #[serde(flatten)]
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// End-of-input marker positioned at `offset`
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", Span::at(offset))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    /// `kind: text`, the listing format shown to users
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}
