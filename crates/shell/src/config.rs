//! Shell configuration, read from environment variables.

use congo_observability::{LogConfig, LogFormat, ParseLogFilterError, ParseLogFormatError};
use thiserror::Error;

pub const DEFAULT_PROMPT: &str = "> ";

pub const ENV_LOG: &str = "CONGO_LOG";
pub const ENV_LOG_FORMAT: &str = "CONGO_LOG_FORMAT";
pub const ENV_PROMPT: &str = "CONGO_PROMPT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid CONGO_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),

    #[error("invalid CONGO_LOG: {0}")]
    InvalidLogFilter(#[from] ParseLogFilterError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub log: LogConfig,
    /// Printed before each line when stdin is a terminal.
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let format = match get(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        let filter = get(ENV_LOG);
        if let Some(directive) = &filter {
            congo_observability::validate_filter(directive)?;
        }

        Ok(Self {
            log: LogConfig { filter, format },
            prompt: get(ENV_PROMPT).unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ShellConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.log.format, LogFormat::Text);
        assert_eq!(config.log.filter, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (ENV_LOG, "congo_inventory=debug"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_PROMPT, "congo> "),
        ]))
        .unwrap();

        assert_eq!(config.log.filter.as_deref(), Some("congo_inventory=debug"));
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.prompt, "congo> ");
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            (ENV_LOG, "  "),
            (ENV_LOG_FORMAT, ""),
            (ENV_PROMPT, ""),
        ]))
        .unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn rejects_unparseable_log_filter() {
        let err =
            ShellConfig::from_lookup(lookup_from(&[(ENV_LOG, "congo_inventory=loud")])).unwrap_err();
        match &err {
            ConfigError::InvalidLogFilter(e) => assert_eq!(e.directive, "congo_inventory=loud"),
            other => panic!("Expected InvalidLogFilter, got {other:?}"),
        }
        assert!(err.to_string().starts_with("invalid CONGO_LOG: invalid log filter"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = ShellConfig::from_lookup(lookup_from(&[(ENV_LOG_FORMAT, "yaml")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid CONGO_LOG_FORMAT: unknown log format 'yaml' (expected 'json' or 'text')"
        );
    }
}
