use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ConfigError;

pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
/// w342 is the medium poster size.
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w342";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub api_base: String,
    pub image_base: String,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn with_api_key(api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            api_base: TMDB_API_BASE.to_string(),
            image_base: TMDB_IMAGE_BASE.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawEnv {
    tmdb_api_key: Option<String>,
}

/// Load `.env` (if any) and pull the credential out of the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => info!("No .env found; using process environment"),
        Err(e) => warn!("Failed to parse .env ({e}). Continuing with process environment."),
    }

    let raw = envy::from_env::<RawEnv>().map_err(|e| ConfigError::Env(e.to_string()))?;
    AppConfig::with_api_key(raw.tmdb_api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_fatal() {
        assert_eq!(
            AppConfig::with_api_key(None).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert_eq!(
            AppConfig::with_api_key(Some("   ".into())).unwrap_err(),
            ConfigError::MissingApiKey
        );
    }

    #[test]
    fn key_is_trimmed_and_defaults_filled() {
        let cfg = AppConfig::with_api_key(Some(" abc123\n".into())).unwrap();
        assert_eq!(cfg.api_key, "abc123");
        assert_eq!(cfg.api_base, TMDB_API_BASE);
        assert_eq!(cfg.image_base, TMDB_IMAGE_BASE);
        assert_eq!(cfg.request_timeout, Duration::from_secs(15));
    }

    #[test]
    fn startup_message_names_the_variable() {
        assert!(ConfigError::MissingApiKey.to_string().contains("TMDB_API_KEY"));
    }
}
