//! Avalon scanner
//!
//! Pull-based: each call to [`Scanner::next_token`] skips whitespace and
//! classifies exactly one token starting at the cursor. Classification
//! looks at single ASCII bytes. A non-ASCII character never matches a
//! class, so it is consumed whole and reported as one `Illegal` token.

use super::keywords::lookup_ident;
use super::token::{Token, TokenKind};
use super::types::Span;
use super::LOG_TARGET;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Identifier bytes: ASCII letters and underscore. Digits are not included.
pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Skipped between tokens: space, tab, newline, carriage return
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Avalon scanner
///
/// Borrows the source for its lifetime. Once the cursor reaches the end of
/// input every further call to `next_token` returns `EndOfInput`.
pub struct Scanner<'src> {
    source: &'src str,
    /// Byte offset of the next unread byte, always on a char boundary
    cursor: usize,
    /// Set once the iterator has yielded `EndOfInput`
    exhausted: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        trace!(target: LOG_TARGET, len = source.len(), "Creating new Scanner");
        Self {
            source,
            cursor: 0,
            exhausted: false,
        }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Produce the next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.cursor;
        let Some(byte) = self.peek() else {
            trace!(target: LOG_TARGET, offset = start, "Reached end of input");
            return Token::eof(self.source.len());
        };

        let kind = match byte {
            b'=' => self.single(TokenKind::Assign),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b',' => self.single(TokenKind::Comma),
            b'+' => self.single(TokenKind::Plus),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b if is_letter(b) => {
                self.eat_while(is_letter);
                lookup_ident(&self.source[start..self.cursor])
            }
            b if is_digit(b) => {
                self.eat_while(is_digit);
                TokenKind::IntegerLiteral
            }
            _ => {
                self.advance_char();
                TokenKind::Illegal
            }
        };

        let text = &self.source[start..self.cursor];
        if kind == TokenKind::Illegal {
            debug!(target: LOG_TARGET, text, offset = start, "Illegal character");
        }
        trace!(
            target: LOG_TARGET,
            kind = kind.as_str(),
            text,
            start,
            end = self.cursor,
            "Produced token"
        );

        Token::new(kind, text, Span::new(start, self.cursor))
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.cursor).copied()
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor += 1;
        kind
    }

    /// Advance over one whole character (one byte for ASCII)
    fn advance_char(&mut self) {
        let width = self.source[self.cursor..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.cursor += width;
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.cursor += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EndOfInput`
    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
        }
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan a whole string, ending with the `EndOfInput` token
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
