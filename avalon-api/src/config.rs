//! API 层配置
//!
//! 包含扫描配置 RunConfig 和全局单例（供 CLI 使用）

use crate::error::AvalonError;
use avalon_config::{AvalonConfig, OutputFormat};
use once_cell::sync::OnceCell;

/// Scan configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Rendering format of the token listing
    pub format: OutputFormat,
    /// Fail on the first illegal character instead of listing it
    pub strict: bool,
    /// Print a numbered source listing before the tokens
    pub show_source: bool,
}

impl RunConfig {
    /// Build from individual options
    pub fn from_options(format: OutputFormat, strict: bool, show_source: bool) -> Self {
        Self {
            format,
            strict,
            show_source,
        }
    }
}

impl From<&AvalonConfig> for RunConfig {
    fn from(config: &AvalonConfig) -> Self {
        Self {
            format: config.output.format,
            strict: config.strict,
            show_source: config.output.show_source,
        }
    }
}

// 全局配置单例（CLI 便利）
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize the global configuration
///
/// Fails if a configuration was already installed.
pub fn init(config: RunConfig) -> Result<(), AvalonError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| AvalonError::Config("global config already initialized".to_string()))
}

/// Global config reference, installing the default on first use
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
