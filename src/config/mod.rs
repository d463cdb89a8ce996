pub mod toml_config;

use crate::utils::error::{RavelryError, Result};
use crate::utils::validation::{validate_range, validate_secret, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

pub use toml_config::TomlConfig;

pub const DEFAULT_API_BASE: &str = "https://api.ravelry.com";

pub const ENV_ACCESS_KEY: &str = "RAV_ACCESS";
pub const ENV_PERSONAL_KEY: &str = "RAV_PERSONAL";
pub const ENV_API_BASE: &str = "RAV_API_BASE";
pub const ENV_TIMEOUT_SECONDS: &str = "RAV_TIMEOUT_SECONDS";

/// Credentials and endpoint for the catalog API.
///
/// `access_key` is sent as the Basic-auth user name and `personal_key` as
/// the password. `Debug` output never contains either key.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub access_key: String,
    pub personal_key: String,
    pub timeout_seconds: Option<u64>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl ClientConfig {
    pub fn new(access_key: impl Into<String>, personal_key: impl Into<String>) -> Self {
        Self {
            api_base: default_api_base(),
            access_key: access_key.into(),
            personal_key: personal_key.into(),
            timeout_seconds: None,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Load from the process environment (`RAV_ACCESS` and `RAV_PERSONAL` are required).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| RavelryError::MissingConfigError {
                field: key.to_string(),
            })
        };

        let timeout_seconds = match lookup(ENV_TIMEOUT_SECONDS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                RavelryError::InvalidConfigValueError {
                    field: ENV_TIMEOUT_SECONDS.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            api_base: lookup(ENV_API_BASE).unwrap_or_else(default_api_base),
            access_key: required(ENV_ACCESS_KEY)?,
            personal_key: required(ENV_PERSONAL_KEY)?,
            timeout_seconds,
        })
    }

    /// Endpoint of a single pattern, `{api_base}/patterns/{id}.json`.
    pub fn pattern_url(&self, id: &crate::domain::PatternId) -> Result<url::Url> {
        let mut url = url::Url::parse(&self.api_base).map_err(|e| {
            RavelryError::InvalidConfigValueError {
                field: "api_base".to_string(),
                value: self.api_base.clone(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;

        url.path_segments_mut()
            .map_err(|_| RavelryError::InvalidConfigValueError {
                field: "api_base".to_string(),
                value: self.api_base.clone(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .push("patterns")
            .push(&format!("{}.json", id));

        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base", &self.api_base)
            .field("access_key", &"<redacted>")
            .field("personal_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_secret("access_key", &self.access_key)?;
        validate_secret("personal_key", &self.personal_key)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }

        tracing::debug!("Client configuration validated for {}", self.api_base);
        Ok(())
    }
}
