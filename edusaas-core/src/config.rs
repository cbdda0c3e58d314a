//! Landing page configuration

use crate::error::ConfigError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Environment variable that overrides the backend origin.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Backend origin used when no override is supplied.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

static GLOBAL: OnceLock<LandingConfig> = OnceLock::new();

/// Configuration shared by the whole page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingConfig {
    /// Backend origin, without a trailing slash
    pub api_base: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl LandingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend origin. The value is taken as is apart from trailing slashes.
    pub fn with_api_base<S: Into<String>>(mut self, api_base: S) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve the configuration from an optional `BACKEND_URL` value.
    ///
    /// Rejected values fall back to [`DEFAULT_API_BASE`] with a warning.
    pub fn from_override(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };

        match validate_api_base(value) {
            Ok(api_base) => Self { api_base },
            Err(e) => {
                warn!("Ignoring {}: {}", BACKEND_URL_VAR, e);
                Self::default()
            }
        }
    }

    /// Resolve the configuration from the process environment, then from the
    /// value captured at compile time.
    pub fn from_env() -> Self {
        let runtime = std::env::var(BACKEND_URL_VAR).ok();
        let value = runtime.as_deref().or(option_env!("BACKEND_URL"));
        Self::from_override(value)
    }

    /// Process-wide configuration, resolved on first use
    pub fn global() -> &'static LandingConfig {
        GLOBAL.get_or_init(|| {
            let config = Self::from_env();
            info!("Course previews will be loaded from {}", config.api_base);
            config
        })
    }

    /// URL of the course listing endpoint
    pub fn courses_url(&self) -> String {
        format!("{}/courses", self.api_base)
    }
}

/// Check a backend origin and normalise it.
pub fn validate_api_base(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|_| ConfigError::Invalid(trimmed.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(ConfigError::UnsupportedScheme {
            url: trimmed.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}
