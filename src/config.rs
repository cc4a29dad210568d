//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the session
//! starts.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SAVED_BANNER_SECONDS` - How long "Your links have been saved" stays
//!   visible (default: 3, range: 1-60)
//! - `SHARE_BASE_URL` - Base of the public profile URL
//!   (default: `https://devlinks.app/profile/`)
//! - `PROFILE_HANDLE` - Handle appended to the share URL (default: `johndoe`)
//! - `STORE_LATENCY_MS` - Simulated store latency for the demo session
//!   (default: 0, max: 10000)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Session configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Seconds the saved status is shown after a successful save.
    pub saved_banner_seconds: u64,
    pub share_base_url: String,
    pub profile_handle: String,
    /// Artificial delay applied by the in-memory store, in milliseconds.
    pub store_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            saved_banner_seconds: 3,
            share_base_url: "https://devlinks.app/profile/".to_string(),
            profile_handle: "johndoe".to_string(),
            store_latency_ms: 0,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            saved_banner_seconds: parse_var("SAVED_BANNER_SECONDS")?
                .unwrap_or(defaults.saved_banner_seconds),
            share_base_url: env::var("SHARE_BASE_URL").unwrap_or(defaults.share_base_url),
            profile_handle: env::var("PROFILE_HANDLE").unwrap_or(defaults.profile_handle),
            store_latency_ms: parse_var("STORE_LATENCY_MS")?.unwrap_or(defaults.store_latency_ms),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `saved_banner_seconds` is outside 1-60
    /// - `share_base_url` is not an http(s) URL
    /// - `profile_handle` is empty or contains `/`
    /// - `store_latency_ms` exceeds 10000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(1..=60).contains(&self.saved_banner_seconds) {
            anyhow::bail!(
                "SAVED_BANNER_SECONDS must be between 1 and 60, got {}",
                self.saved_banner_seconds
            );
        }

        let share_base = url::Url::parse(&self.share_base_url)
            .with_context(|| format!("SHARE_BASE_URL is not a valid URL: '{}'", self.share_base_url))?;
        if share_base.scheme() != "http" && share_base.scheme() != "https" {
            anyhow::bail!(
                "SHARE_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.share_base_url
            );
        }

        if self.profile_handle.trim().is_empty() || self.profile_handle.contains('/') {
            anyhow::bail!(
                "PROFILE_HANDLE must be non-empty and contain no '/', got '{}'",
                self.profile_handle
            );
        }

        if self.store_latency_ms > 10_000 {
            anyhow::bail!(
                "STORE_LATENCY_MS is too large (max: 10000), got {}",
                self.store_latency_ms
            );
        }

        Ok(())
    }

    pub fn store_latency(&self) -> Duration {
        Duration::from_millis(self.store_latency_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Saved banner: {}s", self.saved_banner_seconds);
        tracing::info!("  Share URL base: {}", self.share_base_url);
        tracing::info!("  Profile handle: {}", self.profile_handle);
        tracing::info!("  Store latency: {}ms", self.store_latency_ms);
    }
}

/// Reads an optional numeric variable; unset means `None`.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
