// src/app/tmdb.rs — TMDb v3 client (blocking; worker thread and select handler only)
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::FetchError;

#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    #[serde(default)]
    pub title: String,
}

/// One entry of `/movie/{id}/recommendations`, fields as TMDb sends them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawRecommendation {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
    pub release_date: Option<String>,
}

/// The three calls the app makes. Fakes implement this in tests.
pub trait MovieApi: Send + Sync {
    fn search_movies(&self, query: &str) -> Result<Vec<SearchResult>, FetchError>;
    fn recommendations(&self, movie_id: u64) -> Result<Vec<RawRecommendation>, FetchError>;
    fn poster(&self, poster_path: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct TmdbClient {
    http: Client,
    api_key: String,
    api_base: String,
    image_base: String,
}

impl TmdbClient {
    pub fn new(cfg: &AppConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(concat!("movierec/", env!("CARGO_PKG_VERSION")))
            .timeout(cfg.request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(4)
            .default_headers({
                let mut h = HeaderMap::new();
                h.insert(ACCEPT, HeaderValue::from_static("application/json"));
                h
            })
            .build()
            .map_err(|e| FetchError::Other(format!("http client build failed: {e}")))?;

        Ok(Self {
            http,
            api_key: cfg.api_key.clone(),
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            image_base: cfg.image_base.trim_end_matches('/').to_string(),
        })
    }

    fn get_results<T>(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Vec<T>, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{endpoint}", self.api_base);
        debug!("GET {endpoint}");

        let resp = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(extra)
            .send()?;

        let status = resp.status();
        // A rejected key (401) or unknown movie id (404) surfaces as an error
        // notice; it is never read as an empty "no results" page.
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let page: ResultsPage<T> = resp.json()?;
        Ok(page.results)
    }
}

impl MovieApi for TmdbClient {
    fn search_movies(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        self.get_results("search/movie", &[("query", query)])
    }

    fn recommendations(&self, movie_id: u64) -> Result<Vec<RawRecommendation>, FetchError> {
        self.get_results(&format!("movie/{movie_id}/recommendations"), &[])
    }

    fn poster(&self, poster_path: &str) -> Result<Vec<u8>, FetchError> {
        let url = poster_url(&self.image_base, poster_path);
        let bytes = self
            .http
            .get(&url)
            .header(ACCEPT, "image/avif,image/webp,image/*;q=0.8,*/*;q=0.5")
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())?;
        Ok(bytes.to_vec())
    }
}

/// TMDb poster paths come with a leading slash; tolerate either form.
pub fn poster_url(image_base: &str, poster_path: &str) -> String {
    format!(
        "{}/{}",
        image_base.trim_end_matches('/'),
        poster_path.trim_start_matches('/')
    )
}
