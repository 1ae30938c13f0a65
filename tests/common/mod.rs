//! Test helpers
//!
//! Shared helpers for the end-to-end scanner tests

#![allow(dead_code)]

use avalon_workspace::{scan, RunConfig, ScanOutput, TokenKind};

/// Scan with default configuration, panicking on error
pub fn scan_default(source: &str) -> ScanOutput {
    scan(source, &RunConfig::default())
        .unwrap_or_else(|e| panic!("scan of {source:?} failed: {e}"))
}

/// `(kind, text)` pairs for every token, including `EndOfInput`
pub fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    scan_default(source)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Build the expected pair list from string slices
pub fn expected(items: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
    items.iter().map(|(k, t)| (*k, t.to_string())).collect()
}

/// The text listing the user sees
pub fn listing(source: &str) -> String {
    avalon_workspace::render_text(&scan_default(source).tokens)
}
