// src/app/state.rs — UI controller: owns UiState, launches the worker, applies results
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::poster::load_poster;
use super::retry::RetryPolicy;
use super::tmdb::MovieApi;
use super::types::{
    DetailView, FetchMsg, FetchOutcome, MovieDetail, Notice, NoticeKind, UiState,
};
use super::utils::{list_label, rating_badge, release_year, sort_by_rating_desc};
use super::worker::spawn_fetch;

pub const STATUS_IDLE: &str = "Enter a movie name to get recommendations";
const MAX_MSGS_PER_POLL: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    /// Empty/whitespace query; a warning notice was raised.
    Rejected,
    /// A fetch is already outstanding.
    Busy,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            busy: false,
            status: STATUS_IDLE.to_string(),
            query: String::new(),
            items: Vec::new(),
            selected: None,
            list_placeholder: None,
            detail: DetailView::Placeholder,
            notice: None,
            detail_generation: 0,
        }
    }
}

impl UiState {
    pub fn list_labels(&self) -> Vec<String> {
        self.items.iter().map(list_label).collect()
    }

    fn set_detail(&mut self, detail: DetailView) {
        self.detail = detail;
        self.detail_generation = self.detail_generation.wrapping_add(1);
    }

    fn clear_list_and_card(&mut self) {
        self.items.clear();
        self.selected = None;
        self.list_placeholder = None;
        self.set_detail(DetailView::Placeholder);
    }
}

pub struct Controller {
    api: Arc<dyn MovieApi>,
    retry: RetryPolicy,
    pub state: UiState,
    fetch_rx: Option<Receiver<FetchMsg>>,
}

impl Controller {
    pub fn new(api: Arc<dyn MovieApi>, retry: RetryPolicy) -> Self {
        Self {
            api,
            retry,
            state: UiState::default(),
            fetch_rx: None,
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.busy {
            debug!("submit ignored: fetch in flight");
            return SubmitOutcome::Busy;
        }

        let query = self.state.query.trim().to_string();
        if query.is_empty() {
            self.state.notice = Some(Notice {
                kind: NoticeKind::Warning,
                title: "Input Needed".into(),
                body: "Please enter a movie name".into(),
            });
            return SubmitOutcome::Rejected;
        }

        info!("searching for '{query}'");
        self.state.busy = true;
        self.state.status = "Searching...".into();
        self.fetch_rx = Some(spawn_fetch(Arc::clone(&self.api), self.retry, query));
        SubmitOutcome::Started
    }

    /// Drain worker messages. Returns true if anything changed.
    pub fn poll_worker(&mut self) -> bool {
        let Some(rx) = self.fetch_rx.take() else {
            return false;
        };

        let mut keep = Some(rx);
        let mut changed = false;
        let mut processed = 0;

        while let Some(r) = keep.as_ref() {
            if processed >= MAX_MSGS_PER_POLL {
                break;
            }
            match r.try_recv() {
                Ok(FetchMsg::Status(s)) => {
                    self.state.status = s;
                    processed += 1;
                    changed = true;
                }
                Ok(FetchMsg::Done(outcome)) => {
                    keep = None;
                    self.apply_outcome(outcome);
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("fetch worker exited without a result");
                    keep = None;
                    self.apply_outcome(FetchOutcome::Failed("fetch worker stopped unexpectedly".into()));
                    changed = true;
                }
            }
        }

        if let Some(rx_back) = keep {
            self.fetch_rx = Some(rx_back);
        }
        changed
    }

    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Found { query, mut items } if !items.is_empty() => {
                sort_by_rating_desc(&mut items);
                let n = items.len();
                self.state.items = items;
                self.state.selected = None;
                self.state.list_placeholder = None;
                self.state.status = format!("Found {n} recommendations for '{query}'");
                self.select(0);
            }
            FetchOutcome::Found { query, .. } => {
                self.state.clear_list_and_card();
                self.state.list_placeholder = Some("No recommendations found".into());
                self.state.status = format!("No recommendations found for '{query}'");
            }
            FetchOutcome::NoMatch { .. } => {
                self.state.clear_list_and_card();
                self.state.list_placeholder = Some("No movies found".into());
                self.state.status = "No movies found. Try a different search.".into();
                self.state.notice = Some(Notice {
                    kind: NoticeKind::Info,
                    title: "No results".into(),
                    body: "No movie found with that name.".into(),
                });
            }
            FetchOutcome::Failed(msg) => {
                self.state.clear_list_and_card();
                self.state.status = "Error fetching data. Check connection.".into();
                self.state.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    title: "Error".into(),
                    body: format!("Network error:\n{msg}"),
                });
            }
        }
        self.state.busy = false;
        self.fetch_rx = None;
    }

    /// Show the detail card for `idx`. Blocks on the poster download.
    pub fn select(&mut self, idx: usize) {
        let Some(item) = self.state.items.get(idx) else {
            return;
        };
        if self.state.selected == Some(idx) {
            return;
        }

        let detail = MovieDetail {
            title: item.title.clone(),
            badge: rating_badge(item.rating),
            year: release_year(&item.release_date),
            overview: item.overview.clone(),
            poster: load_poster(self.api.as_ref(), item.poster_path.as_deref()),
        };
        self.state.selected = Some(idx);
        self.state.set_detail(DetailView::Movie(detail));
    }

    pub fn clear(&mut self) {
        self.state.query.clear();
        self.state.clear_list_and_card();
        self.state.status = STATUS_IDLE.to_string();
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }
}
