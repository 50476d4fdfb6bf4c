use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "NutriGuard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ENV_BIND_ADDR: &str = "NUTRIGUARD_BIND_ADDR";
pub const ENV_VISION_URL: &str = "NUTRIGUARD_VISION_URL";
pub const ENV_VISION_API_KEY: &str = "NUTRIGUARD_VISION_API_KEY";
pub const ENV_OCR_TIMEOUT_SECS: &str = "NUTRIGUARD_OCR_TIMEOUT_SECS";
pub const ENV_MAX_IMAGE_BYTES: &str = "NUTRIGUARD_MAX_IMAGE_BYTES";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_VISION_URL: &str = "https://vision.googleapis.com";
pub const DEFAULT_OCR_TIMEOUT_SECS: u64 = 30;
/// Decoded image size limit (4 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,nutriguard_lib=debug,hyper=warn,reqwest=warn"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub vision_url: String,
    pub vision_api_key: Option<String>,
    pub ocr_timeout_secs: u64,
    pub max_image_bytes: usize,
}

impl ServiceConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`. Unset or blank variables take
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = parse_or(get(ENV_BIND_ADDR), ENV_BIND_ADDR, "socket address", || {
            SocketAddr::from(([127, 0, 0, 1], 8787))
        })?;
        let ocr_timeout_secs = parse_or(
            get(ENV_OCR_TIMEOUT_SECS),
            ENV_OCR_TIMEOUT_SECS,
            "integer",
            || DEFAULT_OCR_TIMEOUT_SECS,
        )?;
        let max_image_bytes = parse_or(
            get(ENV_MAX_IMAGE_BYTES),
            ENV_MAX_IMAGE_BYTES,
            "integer",
            || DEFAULT_MAX_IMAGE_BYTES,
        )?;

        if ocr_timeout_secs == 0 {
            return Err(ConfigError::Zero { var: ENV_OCR_TIMEOUT_SECS });
        }
        if max_image_bytes == 0 {
            return Err(ConfigError::Zero { var: ENV_MAX_IMAGE_BYTES });
        }

        Ok(Self {
            bind_addr,
            vision_url: get(ENV_VISION_URL).unwrap_or_else(|| DEFAULT_VISION_URL.to_string()),
            vision_api_key: get(ENV_VISION_API_KEY),
            ocr_timeout_secs,
            max_image_bytes,
        })
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    var: &'static str,
    expected: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default()),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}
