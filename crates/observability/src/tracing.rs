//! Tracing/logging initialization.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when neither an explicit directive nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Output format of the log subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Human-readable lines.
    #[default]
    Text,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected 'json' or 'text')")]
pub struct ParseLogFormatError(pub String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" => Ok(LogFormat::Text),
            other => Err(ParseLogFormatError(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid log filter '{directive}': {reason}")]
pub struct ParseLogFilterError {
    pub directive: String,
    pub reason: String,
}

/// Check that `directive` is a valid `EnvFilter` directive.
pub fn validate_filter(directive: &str) -> Result<(), ParseLogFilterError> {
    EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| ParseLogFilterError {
            directive: directive.to_string(),
            reason: e.to_string(),
        })
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// `EnvFilter` directive; `None` falls back to `RUST_LOG`, then [`DEFAULT_FILTER`].
    ///
    /// Callers building this from user input should check it with [`validate_filter`].
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl LogConfig {
    fn env_filter(&self) -> EnvFilter {
        self.filter
            .as_deref()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so they never mix with command output on stdout.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_log_formats() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" JSON ".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert_eq!(
            "xml".parse::<LogFormat>(),
            Err(ParseLogFormatError("xml".to_string()))
        );
    }

    #[test]
    fn validates_filter_directives() {
        assert_eq!(validate_filter("debug"), Ok(()));
        assert_eq!(validate_filter("congo_inventory=debug,warn"), Ok(()));

        let err = validate_filter("congo_inventory=loud").unwrap_err();
        assert_eq!(err.directive, "congo_inventory=loud");
        assert!(err.to_string().starts_with("invalid log filter 'congo_inventory=loud': "));
    }

    #[test]
    fn init_is_idempotent() {
        let config = LogConfig {
            filter: Some("debug".to_string()),
            format: LogFormat::Json,
        };
        init(&config);
        init(&LogConfig::default());
    }
}
