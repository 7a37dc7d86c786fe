// src/app/worker.rs — background search → recommendations fetch
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use tracing::{error, info};

use super::retry::RetryPolicy;
use super::tmdb::MovieApi;
use super::types::{FetchMsg, FetchOutcome, RecommendationItem};
use crate::error::FetchError;

pub const MAX_RECOMMENDATIONS: usize = 15;
const CHANNEL_BOUND: usize = 16;

/// Spawn one detached worker for `query`. The UI drains the returned receiver;
/// a disconnect without `FetchMsg::Done` means the worker died.
pub fn spawn_fetch(api: Arc<dyn MovieApi>, retry: RetryPolicy, query: String) -> Receiver<FetchMsg> {
    let (tx, rx) = mpsc::sync_channel::<FetchMsg>(CHANNEL_BOUND);

    let spawned = thread::Builder::new()
        .name("fetch-worker".into())
        .spawn(move || {
            let send = |m: FetchMsg| {
                let _ = tx.send(m);
            };
            let outcome =
                run_fetch(api.as_ref(), &retry, &query, &mut |s: String| send(FetchMsg::Status(s)));
            send(FetchMsg::Done(outcome));
        });

    if let Err(e) = spawned {
        error!("failed to spawn fetch worker: {e}");
    }
    rx
}

/// The whole fetch, synchronously. Every error ends up as `FetchOutcome::Failed`.
pub fn run_fetch(
    api: &dyn MovieApi,
    retry: &RetryPolicy,
    query: &str,
    report: &mut dyn FnMut(String),
) -> FetchOutcome {
    match fetch_recommendations(api, retry, query, report) {
        Ok(Some(items)) => {
            info!("{} recommendations for '{query}'", items.len());
            FetchOutcome::Found {
                query: query.to_string(),
                items,
            }
        }
        Ok(None) => {
            info!("no search match for '{query}'");
            FetchOutcome::NoMatch {
                query: query.to_string(),
            }
        }
        Err(e) => {
            error!("fetch for '{query}' failed: {e}");
            FetchOutcome::Failed(e.to_string())
        }
    }
}

fn fetch_recommendations(
    api: &dyn MovieApi,
    retry: &RetryPolicy,
    query: &str,
    report: &mut dyn FnMut(String),
) -> Result<Option<Vec<RecommendationItem>>, FetchError> {
    report("Searching for movies...".into());

    let hits = retry.run(
        || api.search_movies(query),
        |_, _| report("Connection error. Retrying...".into()),
    )?;

    // First match wins; no disambiguation.
    let Some(top) = hits.into_iter().next() else {
        return Ok(None);
    };
    report(format!("Found '{}'. Getting recommendations...", top.title));

    let raw = retry.run(
        || api.recommendations(top.id),
        |_, _| report("Connection error. Retrying...".into()),
    )?;

    Ok(Some(
        raw.into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(RecommendationItem::from)
            .collect(),
    ))
}
