// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between us and TMDb.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Only connection-level failures are worth an immediate retry.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        // request URLs carry the api key as a query param
        let e = e.without_url();
        if e.is_connect() {
            Self::Connection(e.to_string())
        } else if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status {
                status: status.as_u16(),
                endpoint: "TMDb".into(),
            }
        } else {
            Self::Other(e.to_string())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TMDB_API_KEY not found in environment or .env — add TMDB_API_KEY=your_key")]
    MissingApiKey,

    #[error("invalid environment: {0}")]
    Env(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_connection_errors_are_retryable() {
        assert!(FetchError::Connection("refused".into()).is_connection());
        assert!(!FetchError::Timeout("slow".into()).is_connection());
        assert!(!FetchError::Decode("bad json".into()).is_connection());
        assert!(!FetchError::Status { status: 401, endpoint: "search".into() }.is_connection());
    }

    #[test]
    fn status_message_names_endpoint() {
        let e = FetchError::Status { status: 404, endpoint: "movie/12/recommendations".into() };
        assert_eq!(e.to_string(), "HTTP 404 from movie/12/recommendations");
    }
}
