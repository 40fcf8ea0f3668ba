use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Severity at which `check` exits with a non-zero code
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FailOn {
    /// Fail only on critical findings
    Critical,
    /// Fail on warnings and critical findings
    Warning,
    /// Fail on any finding
    Info,
    /// Never fail because of findings
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "icecast-guard")]
#[command(author, version, about = "Icecast configuration guard - audit server configs for risky settings")]
#[command(long_about = "A tool to audit Icecast streaming server configuration files.\n\n\
    Exit codes:\n  \
    0 - No findings at or above the fail level\n  \
    1 - Findings at or above the fail level\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an Icecast XML configuration file
    Check(CheckArgs),

    /// Print best-practice advice for a deployment size
    BestPractices(BestPracticesArgs),

    /// Serve the analysis tools over stdio (JSON-RPC)
    Serve,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the Icecast XML configuration file
    pub path: PathBuf,

    /// Path to the icecast-guard configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Expected number of concurrent listeners (overrides config)
    #[arg(short = 'l', long)]
    pub expected_listeners: Option<u64>,

    /// Output format [possible values: text, markdown, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Severity that causes exit code 1 (overrides config)
    #[arg(long, value_enum)]
    pub fail_on: Option<FailOn>,
}

#[derive(Parser, Debug)]
pub struct BestPracticesArgs {
    /// Deployment size: small, medium, or large
    pub use_case: String,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".icecast-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
