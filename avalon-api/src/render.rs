//! Token listing rendering

use crate::error::AvalonError;
use crate::types::ScanOutput;
use avalon_config::OutputFormat;
use avalon_core::Token;

/// Render the scan output in the requested format
pub fn render(output: &ScanOutput, format: OutputFormat) -> Result<String, AvalonError> {
    match format {
        OutputFormat::Text => Ok(render_text(&output.tokens)),
        OutputFormat::Json => render_json(&output.tokens),
    }
}

/// One `kind: text` line per token
pub fn render_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array of tokens
pub fn render_json(tokens: &[Token]) -> Result<String, AvalonError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
