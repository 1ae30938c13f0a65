//! Keyword table

use super::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Exact, case-sensitive spelling to keyword kind. Built once per process.
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
        ("note", TokenKind::Note),
        ("tag", TokenKind::Tag),
        ("content", TokenKind::Content),
        ("link", TokenKind::Link),
    ])
});

/// Classify an identifier: keyword kind on an exact match, otherwise `Identifier`
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}
