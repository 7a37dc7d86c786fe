// src/app/types.rs
use eframe::egui::ColorImage;

use crate::app::tmdb::RawRecommendation;

pub const UNKNOWN_TITLE: &str = "Unknown";
pub const UNKNOWN_DATE: &str = "Unknown";
pub const NO_OVERVIEW: &str = "No overview available.";

// ---- cross-thread messages ----
pub enum FetchMsg {
    Status(String),
    Done(FetchOutcome),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// Search matched; `items` may still be empty if TMDb had no recommendations.
    Found {
        query: String,
        items: Vec<RecommendationItem>,
    },
    NoMatch {
        query: String,
    },
    Failed(String),
}

// ---- display data ----
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationItem {
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub rating: f64,
    pub release_date: String,
}

impl From<RawRecommendation> for RecommendationItem {
    fn from(raw: RawRecommendation) -> Self {
        fn non_empty(s: Option<String>) -> Option<String> {
            s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        }

        let rating = raw
            .vote_average
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, 10.0))
            .unwrap_or(0.0);

        Self {
            title: non_empty(raw.title).unwrap_or_else(|| UNKNOWN_TITLE.into()),
            overview: non_empty(raw.overview).unwrap_or_else(|| NO_OVERVIEW.into()),
            poster_path: non_empty(raw.poster_path),
            rating,
            release_date: non_empty(raw.release_date).unwrap_or_else(|| UNKNOWN_DATE.into()),
        }
    }
}

// ---- UI state ----
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A blocking dialog; the rest of the window is disabled while one is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingBadge {
    pub text: String,
    pub positive: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PosterView {
    /// TMDb had no poster path for this film.
    Absent,
    Loaded(ColorImage),
    Unavailable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetail {
    pub title: String,
    pub badge: RatingBadge,
    pub year: String,
    pub overview: String,
    pub poster: PosterView,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailView {
    Placeholder,
    Movie(MovieDetail),
}

pub struct UiState {
    pub busy: bool,
    pub status: String,
    pub query: String,
    pub items: Vec<RecommendationItem>,
    pub selected: Option<usize>,
    /// Single greyed row shown when a search produced nothing to list.
    pub list_placeholder: Option<String>,
    pub detail: DetailView,
    pub notice: Option<Notice>,
    pub detail_generation: u64,
}
