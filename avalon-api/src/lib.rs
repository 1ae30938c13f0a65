//! Avalon API - Scan orchestration layer
//!
//! Provides the unified scanning interface, including:
//! - The scan loop over the core scanner
//! - Configuration abstraction (RunConfig)
//! - Rendering of the token listing
//! - Unified error handling (AvalonError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `scan(source, &config)` API.

use tracing::{debug, info};

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from avalon_config
pub use avalon_config::{AvalonConfig, LogConfig, LogLevel, OutputConfig, OutputFormat, Phase};

pub mod error;
pub mod render;
pub mod types;
pub use error::{AvalonError, ErrorReport};
pub use render::{render, render_json, render_text};
pub use types::{position_of, Diagnostic, Position, ScanOutput};

// Re-export core types
pub use avalon_config;
pub use avalon_core::{lookup_ident, tokenize, Scanner, Span, Token, TokenKind};

const LOG_TARGET: &str = "avalon::api";

/// Scan with explicit configuration
///
/// Drives the scanner until `EndOfInput`. Illegal characters are collected
/// as diagnostics, or abort the scan when `config.strict` is set.
pub fn scan(source: &str, config: &RunConfig) -> Result<ScanOutput, AvalonError> {
    info!(target: LOG_TARGET, len = source.len(), strict = config.strict, "Starting scan");

    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();

    loop {
        let token = scanner.next_token();

        if token.is_illegal() {
            let position = position_of(source, token.span.start);
            if config.strict {
                return Err(AvalonError::IllegalCharacter {
                    text: token.text,
                    line: position.line,
                    column: position.column,
                });
            }
            diagnostics.push(Diagnostic {
                text: token.text.clone(),
                span: token.span,
                position,
            });
        }

        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    debug!(
        target: LOG_TARGET,
        tokens = tokens.len(),
        illegal = diagnostics.len(),
        "Scan completed"
    );

    Ok(ScanOutput {
        tokens,
        diagnostics,
    })
}

/// Scan and render in one step, using `config.format`
pub fn scan_and_render(source: &str, config: &RunConfig) -> Result<String, AvalonError> {
    let output = scan(source, config)?;
    render(&output, config.format)
}

/// Scan with the global config (defaults installed if needed)
pub fn quick_scan(source: &str) -> Result<ScanOutput, AvalonError> {
    scan(source, get_config())
}
