//! Error types shared by the API client, the integration store and startup.

use thiserror::Error;

/// Failure talking to the Synapse backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reading or writing persisted integration keys.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key store contents: {0}")]
    Json(#[from] serde_json::Error),

    #[error("key store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("logger error: {0}")]
    Logger(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_body() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "engine offline".into(),
        };
        let text = err.to_string();
        assert!(text.contains("502"));
        assert!(text.contains("engine offline"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: StoreError = io_err.into();
        assert!(err.to_string().starts_with("io error"));
    }

    #[test]
    fn config_error_names_variable() {
        let err = ConfigError::Invalid {
            var: "SYNAPSE_TIMEOUT_SECS",
            value: "soon".into(),
        };
        assert!(err.to_string().contains("SYNAPSE_TIMEOUT_SECS"));
        assert!(err.to_string().contains("soon"));
    }
}
