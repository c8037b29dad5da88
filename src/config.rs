//! Client configuration resolved from the environment.
//!
//! `load_dotenv` applies a `.env` file on desktop builds and otherwise falls
//! back to the bundled `assets/config.env`. Variables already present in the
//! environment always win.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Bundled config for web and mobile builds.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Shown read-only in settings; the backend owns the model connection.
pub const DEFAULT_LLM_URL: &str = "http://localhost:11434";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HEALTH_POLL_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

const KEY_SAVE_DELAY: Duration = Duration::from_millis(1200);
const SYNC_DELAY_MIN: Duration = Duration::from_millis(2000);
const SYNC_DELAY_JITTER: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub health_poll_interval: Duration,
    pub data_dir: PathBuf,
    pub log_level: String,
    pub key_save_delay: Duration,
    pub sync_delay_min: Duration,
    pub sync_delay_jitter: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            health_poll_interval: Duration::from_secs(DEFAULT_HEALTH_POLL_SECS),
            data_dir: default_data_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            key_save_delay: KEY_SAVE_DELAY,
            sync_delay_min: SYNC_DELAY_MIN,
            sync_delay_jitter: SYNC_DELAY_JITTER,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_empty(lookup("SYNAPSE_API_URL")) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = non_empty(lookup("SYNAPSE_TIMEOUT_SECS")) {
            config.request_timeout = Duration::from_secs(parse_secs("SYNAPSE_TIMEOUT_SECS", &raw)?);
        }
        if let Some(raw) = non_empty(lookup("SYNAPSE_HEALTH_POLL_SECS")) {
            let secs = parse_secs("SYNAPSE_HEALTH_POLL_SECS", &raw)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "SYNAPSE_HEALTH_POLL_SECS",
                    value: raw,
                });
            }
            config.health_poll_interval = Duration::from_secs(secs);
        }
        if let Some(dir) = non_empty(lookup("SYNAPSE_DATA_DIR")) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = non_empty(lookup("SYNAPSE_LOG")) {
            config.log_level = level;
        }
        if let Some(raw) = non_empty(lookup("SYNAPSE_SIMULATED_DELAYS")) {
            if !parse_flag("SYNAPSE_SIMULATED_DELAYS", &raw)? {
                config.key_save_delay = Duration::ZERO;
                config.sync_delay_min = Duration::ZERO;
                config.sync_delay_jitter = Duration::ZERO;
            }
        }

        Ok(config)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_secs(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
        }),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("synapse"))
        .unwrap_or_else(|| PathBuf::from("cache"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // .env next to the binary during desktop development
    if dotenvy::dotenv().is_ok() {
        return;
    }
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        if std::env::var(key).is_err() {
            // SAFETY: called once at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        line.split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
    })
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
    fn defaults_match_backend_contract() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.health_poll_interval, Duration::from_secs(10));
        assert_eq!(config.key_save_delay, Duration::from_millis(1200));
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("SYNAPSE_API_URL", "http://10.0.0.2:9000/")]))
                .unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
        assert_eq!(config.endpoint("/ask"), "http://10.0.0.2:9000/ask");
        assert_eq!(config.endpoint(""), "http://10.0.0.2:9000/");
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[("SYNAPSE_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("SYNAPSE_TIMEOUT_SECS"));
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        assert!(
            ClientConfig::from_lookup(lookup_from(&[("SYNAPSE_HEALTH_POLL_SECS", "0")])).is_err()
        );
    }

    #[test]
    fn simulated_delays_can_be_disabled() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[("SYNAPSE_SIMULATED_DELAYS", "off")]))
                .unwrap();
        assert_eq!(config.key_save_delay, Duration::ZERO);
        assert_eq!(config.sync_delay_min, Duration::ZERO);
        assert_eq!(config.sync_delay_jitter, Duration::ZERO);
    }

    #[test]
    fn env_lines_skip_comments() {
        let parsed: Vec<_> =
            parse_env_lines("# comment\n\nSYNAPSE_API_URL = http://x\nBROKEN\n").collect();
        assert_eq!(parsed, vec![("SYNAPSE_API_URL", "http://x")]);
    }
}
