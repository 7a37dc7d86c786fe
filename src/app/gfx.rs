// src/app/gfx.rs
use eframe::egui::{self as eg, ColorImage, TextureHandle};

use super::types::{DetailView, MovieDetail, PosterView};

/// Upload a decoded image to a GPU texture. (UI thread only)
pub fn upload_color_image(ctx: &eg::Context, img: &ColorImage, name: &str) -> TextureHandle {
    ctx.load_texture(name.to_string(), img.clone(), eg::TextureOptions::LINEAR)
}

impl crate::app::MovieRecApp {
    /// Texture for the poster in the detail card, uploaded once per detail change.
    pub(crate) fn poster_texture(&mut self, ctx: &eg::Context) -> Option<TextureHandle> {
        let generation = self.ctl.state.detail_generation;
        let DetailView::Movie(MovieDetail {
            poster: PosterView::Loaded(img),
            ..
        }) = &self.ctl.state.detail
        else {
            self.poster_tex = None;
            return None;
        };

        if let Some((g, tex)) = &self.poster_tex {
            if *g == generation {
                return Some(tex.clone());
            }
        }

        let tex = upload_color_image(ctx, img, &format!("poster-{generation}"));
        self.poster_tex = Some((generation, tex.clone()));
        Some(tex)
    }
}
