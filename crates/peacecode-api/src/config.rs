use std::env;

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

pub const LOG_FORMAT_VAR: &str = "PEACECODE_LOG_FORMAT";
pub const CORS_ORIGIN_VAR: &str = "PEACECODE_CORS_ORIGIN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PEACECODE_LOG_FORMAT must be 'json' or 'pretty', got '{0}'")]
    InvalidLogFormat(String),

    #[error("PEACECODE_CORS_ORIGIN is not a valid origin: '{0}'")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, for CloudWatch.
    #[default]
    Json,
    Pretty,
}

/// Start-up settings, read once from the environment.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub log_format: LogFormat,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset and empty values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_format = match var(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::InvalidLogFormat(v)),
            },
        };

        let cors_origin = match var(CORS_ORIGIN_VAR) {
            None => None,
            Some(v) if v.trim() == "*" => None,
            Some(v) => Some(
                HeaderValue::from_str(v.trim()).map_err(|_| ConfigError::InvalidCorsOrigin(v))?,
            ),
        };

        Ok(Self {
            log_format,
            cors_origin,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        match &self.cors_origin {
            Some(origin) => layer.allow_origin(origin.clone()),
            None => layer.allow_origin(Any),
        }
    }
}
