// src/app/utils.rs
use super::types::{RatingBadge, RecommendationItem, UNKNOWN_DATE};

pub(crate) const LIST_TITLE_MAX: usize = 35;
pub(crate) const LIST_TITLE_KEEP: usize = 32;
pub(crate) const POSITIVE_RATING: f64 = 7.0;

/// Titles longer than 35 chars become the first 32 + "...". Counts chars, not bytes.
pub(crate) fn truncate_title(title: &str) -> String {
    if title.chars().count() > LIST_TITLE_MAX {
        let mut out: String = title.chars().take(LIST_TITLE_KEEP).collect();
        out.push_str("...");
        out
    } else {
        title.to_string()
    }
}

/// One row of the recommendations list, e.g. `Heat (⭐ 7.9)`.
pub(crate) fn list_label(item: &RecommendationItem) -> String {
    let rating = if item.rating > 0.0 {
        format!("⭐ {:.1}", item.rating)
    } else {
        "No rating".to_string()
    };
    format!("{} ({rating})", truncate_title(&item.title))
}

pub(crate) fn rating_badge(rating: f64) -> RatingBadge {
    if rating > 0.0 {
        RatingBadge {
            text: format!("⭐ {rating:.1}/10"),
            positive: rating >= POSITIVE_RATING,
        }
    } else {
        RatingBadge {
            text: "No rating".to_string(),
            positive: false,
        }
    }
}

/// "1998-02-27" → "1998". Anything that doesn't start with a 4-digit year is "Unknown".
pub(crate) fn release_year(release_date: &str) -> String {
    let head = release_date.split('-').next().unwrap_or_default().trim();
    if head.len() == 4 && head.bytes().all(|b| b.is_ascii_digit()) {
        head.to_string()
    } else {
        UNKNOWN_DATE.to_string()
    }
}

/// Stable, highest rating first.
pub(crate) fn sort_by_rating_desc(items: &mut [RecommendationItem]) {
    items.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}
