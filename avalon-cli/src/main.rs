//! Avalon CLI - Command line interface
//!
//! Reads a note source, scans it and prints one `kind: text` line per token.

use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

mod config;
mod logging;
mod platform;

use crate::config::{apply_overrides, load_config, Overrides};
use crate::logging::LogFormat;
use crate::platform::{print_error_with_source, print_source_listing};
use avalon_api::{get_config, init_config, render, scan, AvalonError, RunConfig};
use avalon_config::{LogLevel, OutputFormat};

const LOG_TARGET: &str = "avalon::cli";

/// Output format accepted on the command line
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "avalon", about = "Avalon note language scanner", version)]
struct Cli {
    /// Source file to scan (omit or use "-" for stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Configuration file (default: ./avalon.json when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Token listing format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Fail on the first illegal character
    #[arg(long)]
    strict: bool,

    /// Print the numbered source before the tokens
    #[arg(long)]
    show_source: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format.map(OutputFormat::from),
            strict: self.strict,
            show_source: self.show_source,
            log_level: self.log_level,
        }
    }
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configuration and logging come first; errors here have no source to show
    let settings = match load_config(cli.config.as_deref()) {
        Ok(file) => apply_overrides(file, &cli.overrides()),
        Err(e) => return fail(&e, None),
    };
    if let Err(e) = logging::init_with_file(&settings.log, cli.log_format, cli.log_file.as_deref()) {
        return fail(&e, None);
    }

    let source = match read_source(cli.input.as_deref()) {
        Ok(s) => s,
        Err(e) => return fail(&e, None),
    };

    if let Err(e) = init_config(RunConfig::from(&settings)) {
        return fail(&e, None);
    }
    let run_config = get_config();
    info!(
        target: LOG_TARGET,
        format = run_config.format.as_str(),
        strict = run_config.strict,
        "Configuration loaded"
    );

    if run_config.show_source {
        print_source_listing(&source);
    }

    match handle_scan(&source, run_config) {
        Ok(listing) => {
            println!("{listing}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e, Some(&source)),
    }
}

/// Scan and render, reporting illegal characters to the log
fn handle_scan(source: &str, config: &RunConfig) -> Result<String, AvalonError> {
    let output = scan(source, config)?;
    for diagnostic in &output.diagnostics {
        warn!(
            target: LOG_TARGET,
            text = %diagnostic.text,
            line = diagnostic.position.line,
            column = diagnostic.position.column,
            "Illegal character"
        );
    }
    render(&output, config.format)
}

/// Read the input file, or stdin for `None` and `-`
///
/// Bytes that are not valid UTF-8 become U+FFFD and scan as `Illegal`.
fn read_source(input: Option<&Path>) -> Result<String, AvalonError> {
    let bytes = match input {
        Some(path) if path != Path::new("-") => {
            std::fs::read(path).map_err(|source| AvalonError::Io {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|source| AvalonError::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buffer
        }
    };
    Ok(decode_source(bytes))
}

fn decode_source(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                target: LOG_TARGET,
                offset = e.utf8_error().valid_up_to(),
                "Input is not valid UTF-8"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn fail(e: &AvalonError, source: Option<&str>) -> ExitCode {
    print_error_with_source(e, source);
    ExitCode::FAILURE
}
