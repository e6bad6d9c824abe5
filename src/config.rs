use crate::cli::OutputFormat;
use crate::filter::MessagePrefixes;
use crate::query::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Free-form label for the loaded profile.
    pub profile_name: String,
    pub filter: FilterRules,
    pub output: OutputRules,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            profile_name: "base".to_string(),
            filter: FilterRules::default(),
            output: OutputRules::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    /// Message-catalog prefixes stripped from the start of filter tokens
    pub message_prefixes: Vec<String>,
    /// Filter used when none is given on the command line
    pub default_ids: String,
    pub default_severity: Option<Severity>,
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            message_prefixes: vec!["BIP".to_string()],
            default_ids: String::new(),
            default_severity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputRules {
    pub format: OutputFormat,
}

impl FilterConfig {
    /// Compile the configured message prefixes once for reuse across filters
    pub fn message_prefixes(&self) -> MessagePrefixes {
        MessagePrefixes::new(&self.filter.message_prefixes)
    }

    /// Prefixes that can never match anything
    pub fn empty_prefix_count(&self) -> usize {
        self.filter
            .message_prefixes
            .iter()
            .filter(|p| p.is_empty())
            .count()
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FilterConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<FilterConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static FilterConfig {
    static DEFAULT_CONFIG: LazyLock<FilterConfig> = LazyLock::new(FilterConfig::default);
    &DEFAULT_CONFIG
}
