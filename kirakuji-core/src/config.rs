//! API base URL resolution.
//!
//! The base URL is baked in at compile time through `KIRAKUJI_API_BASE`
//! (the same way the web crate reads `PUBLIC_URL`). Resolution is deferred to
//! the first request so a missing value fails the call instead of the page load.

use thiserror::Error;

/// Name of the environment variable carrying the API base URL.
pub const API_BASE_ENV: &str = "KIRAKUJI_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("KIRAKUJI_API_BASE が未設定です")]
    MissingApiBase,
}

/// A trimmed, non-empty API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Resolve a raw configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiBase`] when the value is absent or blank.
    pub fn resolve(raw: Option<&str>) -> Result<Self, ConfigError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingApiBase);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base URL without trailing slashes.
    #[must_use]
    pub fn normalized(&self) -> &str {
        self.0.trim_end_matches('/')
    }

    /// Join an endpoint path onto the normalized base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{base}/{path}",
            base = self.normalized(),
            path = path.trim_start_matches('/')
        )
    }
}

/// The base URL captured when the crate was compiled, if any.
#[must_use]
pub fn build_time_api_base() -> Option<&'static str> {
    option_env!("KIRAKUJI_API_BASE")
}
