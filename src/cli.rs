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

#[derive(Parser, Debug)]
#[command(name = "project-audit")]
#[command(author, version, about = "Audit project structure and uv-first Python workflow compliance")]
#[command(long_about = "Checks a project against declarative structure standards and, for \
    Python projects, the uv-first packaging workflow.\n\n\
    Exit codes:\n  \
    0 - Quality gate passed (or project is uv-compliant)\n  \
    1 - Quality gate failed (or project is not uv-compliant)\n  \
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

    /// Standards directory (default: ./standards, then the user config directory)
    #[arg(long, global = true)]
    pub standards: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default tracing filter when `RUST_LOG` is not set.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit project structure (and uv compliance for Python projects)
    Audit(AuditArgs),

    /// Validate uv-first workflow compliance only
    Uv(AuditArgs),

    /// Write the bundled standards documents
    Init(InitArgs),

    /// List available project templates
    Templates(TemplatesArgs),
}

#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Project directory to audit
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to write the standards documents into
    #[arg(short, long, default_value = "standards")]
    pub output: PathBuf,

    /// Overwrite existing documents
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Templates directory
    #[arg(long, default_value = "templates")]
    pub dir: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
