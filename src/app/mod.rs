// src/app/mod.rs — single-window recommendation finder

// ---- Standard lib imports ----
use std::sync::Arc;
use std::time::Duration;

// ---- Crates ----
use eframe::egui::{self as eg, TextureHandle};

// ---- Local modules ----
pub mod detail;
pub mod gfx;
pub mod poster;
pub mod retry;
pub mod state;
pub mod tmdb;
pub mod types;
pub mod ui;
pub mod utils;
pub mod worker;

#[cfg(test)]
mod testutil;

use crate::config::AppConfig;
use crate::error::FetchError;
use retry::RetryPolicy;
use state::Controller;
use tmdb::{MovieApi, TmdbClient};

// ---- Tunables ----
/// How often to poll the worker channel while a search is in flight.
const BUSY_REPAINT_MS: u64 = 50;

pub struct MovieRecApp {
    ctl: Controller,
    // (detail_generation, texture) for the poster currently on screen
    poster_tex: Option<(u64, TextureHandle)>,
    focus_query: bool,
}

impl MovieRecApp {
    pub fn new(cfg: &AppConfig) -> Result<Self, FetchError> {
        let api: Arc<dyn MovieApi> = Arc::new(TmdbClient::new(cfg)?);
        Ok(Self::with_api(api, RetryPolicy::default()))
    }

    pub fn with_api(api: Arc<dyn MovieApi>, retry: RetryPolicy) -> Self {
        Self {
            ctl: Controller::new(api, retry),
            poster_tex: None,
            focus_query: true,
        }
    }
}

// ========== App impl ==========
impl eframe::App for MovieRecApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        if self.ctl.poll_worker() {
            ctx.request_repaint();
        }
        // nothing else wakes the UI when the worker posts
        if self.ctl.state.busy {
            ctx.request_repaint_after(Duration::from_millis(BUSY_REPAINT_MS));
        }

        self.ui_render(ctx);
    }
}
