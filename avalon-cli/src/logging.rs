//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志输出到 stderr，
//! stdout 只保留 token 清单。

use crate::config::tracing_level;
use avalon_api::AvalonError;
use avalon_config::{LogConfig, Phase};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色多行格式（开发使用）
    Pretty,
    /// 紧凑单行格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// Build the per-phase target filter
pub fn targets(log_config: &LogConfig) -> Targets {
    let mut targets = Targets::new().with_default(tracing_level(log_config.level));
    for phase in [Phase::Lexer, Phase::Api, Phase::Cli] {
        targets = targets.with_target(phase.target(), tracing_level(log_config.level_for(phase)));
    }
    targets
}

/// Install the global subscriber, optionally duplicating output to a file
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> Result<(), AvalonError> {
    let targets = targets(log_config);

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    layers.push(
        create_format_layer(format, io::stderr, true)
            .with_filter(targets.clone())
            .boxed(),
    );

    if let Some(path) = file {
        let handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| AvalonError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        layers.push(
            create_format_layer(format, Arc::new(handle), false)
                .with_filter(targets)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| AvalonError::Config(format!("cannot install logger: {e}")))
}

/// 根据格式创建格式化层
fn create_format_layer<M>(
    format: LogFormat,
    make_writer: M,
    ansi: bool,
) -> Box<dyn Layer<Registry> + Send + Sync>
where
    M: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
