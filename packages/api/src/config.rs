//! # Client configuration
//!
//! Where the notes API lives. Resolved once at startup:
//!
//! ```toml
//! base_url = "https://notes.example.com/api"
//! ```
//!
//! [`ClientConfig::from_env`] reads `NOTES_API_URL` from the process environment
//! (native, with `.env` support) or from the build environment (wasm, where there
//! is no process environment at runtime). When unset, [`DEFAULT_BASE_URL`] is used.

use serde::Deserialize;

use crate::ApiError;

/// Environment variable naming the API root.
pub const API_URL_ENV: &str = "NOTES_API_URL";

/// Backend default for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `http://127.0.0.1:8000/api`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("base_url is empty".to_string()));
        }
        Ok(Self { base_url })
    }

    /// Parse from a TOML document with a `base_url` key.
    pub fn from_toml(s: &str) -> Result<Self, ApiError> {
        let raw: ClientConfig = toml::from_str(s).map_err(|e| ApiError::Config(e.to_string()))?;
        Self::new(raw.base_url)
    }

    pub fn from_env() -> Result<Self, ApiError> {
        match env_base_url() {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    /// Absolute URL for an API path such as `/notes/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(target_arch = "wasm32")]
fn env_base_url() -> Option<String> {
    option_env!("NOTES_API_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn env_base_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_URL_ENV).ok()
}
