//! Avalon Core - Scanner for the Avalon note language (pure logic, no IO)
//!
//! Converts source text into classified tokens. Only operates on in-memory
//! strings, no file IO or terminal output.

pub mod lexer;

// Re-export common types
pub use lexer::{lookup_ident, tokenize, Scanner, Span, Token, TokenKind};

// Re-export config types from avalon-config
pub use avalon_config::Phase;
