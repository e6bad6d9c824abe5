pub mod cli;
pub mod config;
pub mod filter;
pub mod query;

use colored::Colorize;
pub use cli::{ColorMode, Commands, OutputFormat, cli_parse, resolve_severity};
pub use filter::{EventIdFilter, EventRange, FilterParseError, MessagePrefixes};
pub use query::{EventQuery, Severity};
use serde::Serialize;

/// JSON shape of a compiled query
#[derive(Debug, Serialize)]
pub struct QueryReport<'a> {
    pub filter: &'a str,
    pub severity: Option<Severity>,
    pub query: &'a str,
    #[serde(flatten)]
    pub events: &'a EventIdFilter,
}

impl<'a> QueryReport<'a> {
    pub fn new(filter: &'a str, query: &'a EventQuery) -> Self {
        Self {
            filter,
            severity: query.severity(),
            query: query.query(),
            events: query.filter(),
        }
    }
}

/// Outcome of validating one filter with `check`
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub filter: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    fn new(filter: &str, outcome: Result<EventQuery, FilterParseError>) -> Self {
        Self {
            filter: filter.to_string(),
            valid: outcome.is_ok(),
            error: outcome.err().map(|e| e.to_string()),
        }
    }

    fn to_line(&self, colored: bool) -> String {
        let status = match (self.valid, colored) {
            (true, true) => "ok".green().bold().to_string(),
            (true, false) => "ok".to_string(),
            (false, true) => "invalid".red().bold().to_string(),
            (false, false) => "invalid".to_string(),
        };
        match &self.error {
            Some(error) => format!("{status}  '{}': {error}", self.filter),
            None => format!("{status}  '{}'", self.filter),
        }
    }
}

/// Compile a filter the way the command line does, stripping `prefixes` when given
pub fn compile_query(
    ids: &str,
    severity: Option<Severity>,
    prefixes: Option<&MessagePrefixes>,
) -> Result<EventQuery, FilterParseError> {
    match prefixes {
        Some(prefixes) => EventQuery::with_prefixes(ids, severity, prefixes),
        None => EventQuery::new(ids, severity),
    }
}

fn write_output_file(
    path: &std::path::Path,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write output file '{}': {}", path.display(), e).into())
}

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        // Let the terminal decide
        ColorMode::Auto => {}
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli_parse();
    let config = crate::config::load_config(cli.config.as_deref())
        .map_err(|e| format!("Failed to load config: {}", e))?;
    let format = cli.effective_format(&config);
    let output = &cli.output;
    let verbose = cli.verbose;
    let quiet = cli.quiet;

    apply_color_mode(cli.color);

    if verbose > 0 && !quiet {
        eprintln!("Verbosity level: {}", verbose);
        eprintln!("Color mode: {:?}", cli.color);
        eprintln!("Config profile: {}", config.profile_name);
        if let Some(config_path) = &cli.config {
            eprintln!("Config file: {}", config_path.display());
        }
        if let Some(out_path) = output {
            eprintln!("Output will be written to: {}", out_path.display());
        }
    }

    let empty_prefixes = config.empty_prefix_count();
    if empty_prefixes > 0 && !quiet {
        eprintln!(
            "{} {} empty message prefix(es) in config are ignored",
            "Warning:".yellow().bold(),
            empty_prefixes
        );
    }
    let prefixes = config.message_prefixes();

    match &cli.command {
        Commands::Query {
            ids,
            level,
            warnings,
            errors,
            critical,
            no_prefixes,
        } => {
            let ids = ids.as_deref().unwrap_or(&config.filter.default_ids);
            let severity = resolve_severity(*level, *warnings, *errors, *critical)
                .or(config.filter.default_severity);

            if verbose > 0 && !quiet {
                eprintln!("Filter: '{}'", ids);
                match severity {
                    Some(s) => eprintln!("Severity: {} ({})", s.name(), s.threshold()),
                    None => eprintln!("Severity: any"),
                }
                if !no_prefixes && verbose > 1 {
                    eprintln!(
                        "Message prefixes: {}",
                        config.filter.message_prefixes.join(", ")
                    );
                }
            }

            let query = compile_query(ids, severity, (!no_prefixes).then_some(&prefixes))
                .map_err(|e| format!("Invalid --ids filter: {}", e))?;

            let text = match format {
                OutputFormat::Text => query.query().to_string(),
                OutputFormat::Json => serde_json::to_string_pretty(&QueryReport::new(ids, &query))
                    .map_err(|e| format!("Failed to serialize query: {}", e))?,
            };

            println!("{text}");
            if let Some(path) = output {
                write_output_file(path, &format!("{text}\n"))?;
            }
        }
        Commands::Check { filters } => {
            let results: Vec<CheckResult> = filters
                .iter()
                .map(|f| CheckResult::new(f, compile_query(f, None, Some(&prefixes))))
                .collect();

            match format {
                OutputFormat::Text => {
                    // --quiet leaves only the exit status and the summary error
                    if !quiet {
                        for result in &results {
                            println!("{}", result.to_line(true));
                        }
                    }
                    if let Some(path) = output {
                        let plain: Vec<String> = results.iter().map(|r| r.to_line(false)).collect();
                        write_output_file(path, &format!("{}\n", plain.join("\n")))?;
                    }
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&results)
                        .map_err(|e| format!("Failed to serialize results: {}", e))?;
                    println!("{json}");
                    if let Some(path) = output {
                        write_output_file(path, &format!("{json}\n"))?;
                    }
                }
            }

            let invalid = results.iter().filter(|r| !r.valid).count();
            if invalid > 0 {
                return Err(format!("{} of {} filters are invalid", invalid, results.len()).into());
            }
        }
    }

    Ok(())
}
