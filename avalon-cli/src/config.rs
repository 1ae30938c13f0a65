//! CLI 配置
//!
//! 读取 `avalon.json`，再用命令行参数覆盖其中的值

use avalon_api::AvalonError;
use avalon_config::{AvalonConfig, LogLevel, OutputFormat};
use std::path::Path;
use tracing::Level;

/// 未指定 `--config` 时在当前目录查找的配置文件
pub const DEFAULT_CONFIG_FILE: &str = "avalon.json";

/// Values given on the command line; `None`/`false` keeps the file value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub strict: bool,
    pub show_source: bool,
    pub log_level: Option<LogLevel>,
}

/// Load the configuration file
///
/// An explicit path must exist. Without one, `./avalon.json` is used when
/// present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<AvalonConfig, AvalonError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                read_config(default)
            } else {
                Ok(AvalonConfig::default())
            }
        }
    }
}

/// Read and parse one config file
pub fn read_config(path: &Path) -> Result<AvalonConfig, AvalonError> {
    let content = std::fs::read_to_string(path).map_err(|source| AvalonError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    AvalonConfig::from_json(&content).map_err(|source| AvalonError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply command line overrides to a loaded config
pub fn apply_overrides(mut config: AvalonConfig, overrides: &Overrides) -> AvalonConfig {
    if let Some(format) = overrides.format {
        config.output.format = format;
    }
    if let Some(level) = overrides.log_level {
        config.log.level = level;
    }
    config.strict |= overrides.strict;
    config.output.show_source |= overrides.show_source;
    config
}

/// Map a config log level onto `tracing`
pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}
