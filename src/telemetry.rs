//! Diagnostic logging.
//!
//! Events go to stderr so the program's stdout stays byte-for-byte stable.
//! `RUST_LOG` wins over the configured level when it parses.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl TelemetryConfig {
    pub fn with_log_level(log_level: impl Into<String>) -> Self {
        Self {
            log_level: log_level.into(),
        }
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.log_level).map_err(|source| Error::LogFilter {
                directive: self.log_level.clone(),
                source,
            }),
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &TelemetryConfig) -> Result<()> {
    let filter = config.env_filter()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| Error::Subscriber(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(TelemetryConfig::default().log_level, "warn");
    }

    #[test]
    fn test_valid_level_builds_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(TelemetryConfig::with_log_level("debug").env_filter().is_ok());
    }

    #[test]
    fn test_invalid_level_is_reported() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryConfig::with_log_level("name_pipelines=loud");
        match config.env_filter() {
            Err(Error::LogFilter { directive, .. }) => assert_eq!(directive, "name_pipelines=loud"),
            other => panic!("expected LogFilter error, got {:?}", other),
        }
    }
}
