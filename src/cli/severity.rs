use crate::query::Severity;
use clap::ValueEnum;

/// Severity names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeverityArg {
    Critical,
    Error,
    Warning,
    Informational,
    Verbose,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Critical => Severity::Critical,
            SeverityArg::Error => Severity::Error,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Informational => Severity::Informational,
            SeverityArg::Verbose => Severity::Verbose,
        }
    }
}
