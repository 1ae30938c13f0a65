//! Avalon lexer
//!
//! Single-pass, left-to-right scanner with maximal munch for identifiers
//! and integers. Classification is ASCII only.

pub mod keywords;
pub mod scanner;
pub mod token;
pub mod types;

pub use keywords::lookup_ident;
pub use scanner::{is_digit, is_letter, is_whitespace, tokenize, Scanner};
pub use token::{Token, TokenKind};
pub use types::Span;

/// Log target used by the scanner
pub const LOG_TARGET: &str = "avalon::lexer";
