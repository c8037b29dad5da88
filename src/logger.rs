//! Tracing subscriber setup. Call [`init`] once from `main`.

use crate::error::ConfigError;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| filter_for(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Logger(format!("failed to set subscriber: {e}")))
}

/// Accepts a bare level or full filter directives such as `synapse=debug,warn`.
fn filter_for(level: &str) -> Result<EnvFilter, ConfigError> {
    if level.trim().is_empty() {
        return Err(ConfigError::Logger("log level must not be empty".into()));
    }
    EnvFilter::try_new(level)
        .map_err(|e| ConfigError::Logger(format!("invalid log level '{level}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_and_directives_parse() {
        for level in ["error", "warn", "info", "debug", "trace", "synapse=debug,warn"] {
            assert!(filter_for(level).is_ok(), "{level} should parse");
        }
        assert!(filter_for("").is_err());
        assert!(filter_for("synapse=loud").is_err());
    }

    #[test]
    fn second_init_reports_error() {
        let _ = init("info");
        match init("info") {
            Err(ConfigError::Logger(msg)) => assert!(msg.contains("set subscriber")),
            other => panic!("expected logger error, got {other:?}"),
        }
    }
}
