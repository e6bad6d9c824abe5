use crate::filter::FilterParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event log severity threshold
///
/// Lower numbers are more severe. A threshold selects entries whose level is
/// in `1..=threshold`; level 0 ("log always") is never selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical = 1,
    Error = 2,
    Warning = 3,
    Informational = 4,
    Verbose = 5,
}

impl Severity {
    pub fn threshold(self) -> u8 {
        self as u8
    }

    /// Map the integer convention used by callers: `-1` means no severity
    /// filter, `1..=5` selects a threshold
    pub fn from_threshold(value: i32) -> Result<Option<Self>, FilterParseError> {
        match value {
            -1 => Ok(None),
            1 => Ok(Some(Severity::Critical)),
            2 => Ok(Some(Severity::Error)),
            3 => Ok(Some(Severity::Warning)),
            4 => Ok(Some(Severity::Informational)),
            5 => Ok(Some(Severity::Verbose)),
            other => Err(FilterParseError::InvalidSeverity(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Informational => "informational",
            Severity::Verbose => "verbose",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.threshold())
    }
}
