//! API error types
//!
//! Unified error type and a structured, serialisable error report.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Avalon error type
///
/// The scanner itself never fails; these cover everything around it.
#[derive(Error, Debug)]
pub enum AvalonError {
    /// Input or config file could not be read
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid `avalon.json`
    #[error("invalid config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration misuse
    #[error("config error: {0}")]
    Config(String),

    /// Illegal character in strict mode
    #[error("illegal character '{text}' at {line}:{column}")]
    IllegalCharacter {
        text: String,
        line: usize,
        column: usize,
    },

    /// Token listing could not be serialised
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

impl AvalonError {
    /// Line number, if the error points into the source
    pub fn line(&self) -> Option<usize> {
        match self {
            AvalonError::IllegalCharacter { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Column number, if the error points into the source
    pub fn column(&self) -> Option<usize> {
        match self {
            AvalonError::IllegalCharacter { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// Phase in which the error occurred
    pub fn phase(&self) -> &'static str {
        match self {
            AvalonError::Io { .. } => "io",
            AvalonError::ConfigParse { .. } | AvalonError::Config(_) => "config",
            AvalonError::IllegalCharacter { .. } => "lexer",
            AvalonError::Render(_) => "render",
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            AvalonError::Io { .. } => "Io",
            AvalonError::ConfigParse { .. } => "ConfigParse",
            AvalonError::Config(_) => "Config",
            AvalonError::IllegalCharacter { .. } => "IllegalCharacter",
            AvalonError::Render(_) => "Render",
        }
    }

    /// Convert to a structured report
    ///
    /// The CLI prints it; tools can serialise it to JSON.
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: self.column(),
            error_kind: self.kind_name().to_string(),
            message: self.to_string(),
        }
    }
}

/// Structured error report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Error phase: io, config, lexer, render
    pub phase: &'static str,
    /// 1-based line, if any
    pub line: Option<usize>,
    /// 1-based column, if any
    pub column: Option<usize>,
    /// Error kind (for programmatic handling)
    pub error_kind: String,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            _ => write!(f, "[{}] error: {}", self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// JSON form of the report
    pub fn to_json(&self) -> Result<String, AvalonError> {
        Ok(serde_json::to_string(self)?)
    }
}
