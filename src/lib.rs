//! Avalon - scanner for a small note-taking/scripting language
//!
//! # Architecture
//!
//! ```text
//! avalon-config/  - Pure configuration data (avalon.json)
//! avalon-core/    - Token taxonomy and scanner (no IO)
//! avalon-api/     - Scan orchestration, rendering, errors
//! avalon-cli/     - `avalon` binary (IO, logging, terminal output)
//! ```
//!
//! # Quick Start
//!
//! ```
//! use avalon_workspace::{scan, render, OutputFormat, RunConfig};
//!
//! let output = scan("let five = 5;", &RunConfig::default()).unwrap();
//! let listing = render(&output, OutputFormat::Text).unwrap();
//! assert!(listing.starts_with("Let: let"));
//! ```

pub use avalon_api::*;

/// Scan with default configuration and return the text listing
///
/// # Example
/// ```
/// let listing = avalon_workspace::quick_listing("x").unwrap();
/// assert_eq!(listing, "Identifier: x\nEndOfInput: ");
/// ```
pub fn quick_listing(source: &str) -> Result<String, AvalonError> {
    let output = quick_scan(source)?;
    render(&output, get_config().format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_listing() {
        let listing = quick_listing("note").unwrap();
        assert_eq!(listing, "Note: note\nEndOfInput: ");
    }
}
