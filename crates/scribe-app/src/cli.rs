use std::path::PathBuf;

use clap::Parser;

/// Scribe, a rich-text editor host driving an embedded editor engine.
#[derive(Parser, Debug)]
#[command(name = "scribe", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing directive such as `scribe_bridge=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial document HTML, replacing `editor.initial_content`.
    #[arg(long)]
    pub content: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Turn a `--log-level` value into an `EnvFilter` directive.
///
/// A bare level applies to the `scribe` crates only; anything else is
/// passed through untouched.
pub fn log_directive(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        lvl @ ("trace" | "debug" | "info" | "warn" | "error") => format!("scribe={lvl}"),
        _ => level.to_string(),
    }
}
