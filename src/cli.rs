mod severity;

use crate::config::FilterConfig;
use crate::query::Severity;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use severity::SeverityArg;
use std::path::PathBuf;

/// Compile event ID filters into Windows event log queries
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, env = "EVENTLOG_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config value, then text)
    #[arg(short = 'F', long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the result to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print diagnostics to stderr (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostics and status lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a filter and print the resulting query
    Query {
        /// Event ID filter, e.g. "1,2,5-99,-45,-15"
        #[arg(short, long, allow_hyphen_values = true)]
        ids: Option<String>,

        /// Only show entries at this severity or more severe
        #[arg(short, long, value_enum)]
        level: Option<SeverityArg>,

        /// Only show warnings and above
        #[arg(long)]
        warnings: bool,

        /// Only show errors and above (overrides --warnings)
        #[arg(long)]
        errors: bool,

        /// Only show critical entries (overrides --errors and --warnings)
        #[arg(long)]
        critical: bool,

        /// Do not strip configured message prefixes from event IDs
        #[arg(long)]
        no_prefixes: bool,
    },
    /// Validate one or more filters without printing queries
    Check {
        /// Filters to validate
        #[arg(required = true, allow_hyphen_values = true)]
        filters: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    pub fn effective_format(&self, config: &FilterConfig) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }
}

/// Resolve the severity flags of `query`
///
/// `--critical` beats `--errors` beats `--warnings`, and an explicit
/// `--level` beats all of them.
pub fn resolve_severity(
    level: Option<SeverityArg>,
    warnings: bool,
    errors: bool,
    critical: bool,
) -> Option<Severity> {
    if let Some(level) = level {
        return Some(level.into());
    }
    if critical {
        Some(Severity::Critical)
    } else if errors {
        Some(Severity::Error)
    } else if warnings {
        Some(Severity::Warning)
    } else {
        None
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_severity_override_order() {
        assert_eq!(resolve_severity(None, false, false, false), None);
        assert_eq!(
            resolve_severity(None, true, false, false),
            Some(Severity::Warning)
        );
        assert_eq!(
            resolve_severity(None, true, true, false),
            Some(Severity::Error)
        );
        assert_eq!(
            resolve_severity(None, true, true, true),
            Some(Severity::Critical)
        );
        assert_eq!(
            resolve_severity(Some(SeverityArg::Verbose), true, true, true),
            Some(Severity::Verbose)
        );
    }

    #[test]
    fn test_query_accepts_hyphenated_filter() {
        let cli = Cli::try_parse_from(["eventlog-filter", "query", "--ids", "-42-49"]).unwrap();
        match cli.command {
            Commands::Query { ids, .. } => assert_eq!(ids.as_deref(), Some("-42-49")),
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_verbose_is_counted() {
        let cli = Cli::try_parse_from(["eventlog-filter", "-vv", "check", "1"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
