//! API type definitions
//!
//! Scan output and source positions.

use avalon_core::{Span, Token};
use serde::Serialize;

/// 1-based line/column of a byte offset
///
/// Columns count bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Locate a byte offset in `source`. Offsets past the end are clamped.
pub fn position_of(source: &str, offset: usize) -> Position {
    let bytes = source.as_bytes();
    let offset = offset.min(bytes.len());
    let before = &bytes[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |idx| idx + 1);
    Position {
        line,
        column: offset - line_start + 1,
    }
}

/// An illegal character found while scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub text: String,
    pub span: Span,
    pub position: Position,
}

/// Scan output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    /// Every token in order, ending with `EndOfInput`
    pub tokens: Vec<Token>,
    /// Illegal characters, in source order
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    pub fn illegal_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Tokens without the trailing end-of-input marker
    pub fn significant_tokens(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_eof() => rest,
            _ => &self.tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avalon_core::tokenize;

    #[test]
    fn test_position_first_line() {
        assert_eq!(position_of("let x", 0), Position { line: 1, column: 1 });
        assert_eq!(position_of("let x", 4), Position { line: 1, column: 5 });
    }

    #[test]
    fn test_position_after_newlines() {
        let source = "a\nbc\n  @";
        assert_eq!(position_of(source, 2), Position { line: 2, column: 1 });
        assert_eq!(position_of(source, 7), Position { line: 3, column: 3 });
    }

    #[test]
    fn test_position_clamped() {
        assert_eq!(position_of("ab", 99), Position { line: 1, column: 3 });
        assert_eq!(position_of("", 0), Position { line: 1, column: 1 });
    }

    #[test]
    fn test_significant_tokens() {
        let output = ScanOutput {
            tokens: tokenize("a b"),
            diagnostics: Vec::new(),
        };
        assert_eq!(output.tokens.len(), 3);
        assert_eq!(output.significant_tokens().len(), 2);
        assert_eq!(output.illegal_count(), 0);
    }
}
