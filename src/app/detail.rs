// src/app/detail.rs
use eframe::egui::{self as eg, RichText, TextureHandle};

use super::poster::{POSTER_MAX_H, POSTER_MAX_W};
use super::types::{DetailView, MovieDetail, PosterView, UNKNOWN_DATE};
use super::ui::{BORDER, CARD_BG, SUCCESS, TEXT_SECONDARY};

impl crate::app::MovieRecApp {
    pub(crate) fn ui_render_detail(&mut self, ui: &mut eg::Ui) {
        ui.label(RichText::new("Movie Details").size(14.0).strong());
        ui.add_space(4.0);

        let tex = self.poster_texture(ui.ctx());

        eg::Frame::group(ui.style())
            .fill(CARD_BG)
            .inner_margin(10.0)
            .show(ui, |ui| {
                eg::ScrollArea::vertical()
                    .id_source("detail_card")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| match &self.ctl.state.detail {
                        DetailView::Placeholder => render_placeholder(ui),
                        DetailView::Movie(d) => render_movie(ui, d, tex.as_ref()),
                    });
            });
    }
}

fn render_placeholder(ui: &mut eg::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("🎬").size(48.0).color(BORDER));
        ui.add_space(16.0);
        ui.label(RichText::new("Select a movie").size(16.0).strong().color(TEXT_SECONDARY));
        ui.label(RichText::new("Choose a movie from the list to see details").color(TEXT_SECONDARY));
    });
}

fn render_movie(ui: &mut eg::Ui, d: &MovieDetail, tex: Option<&TextureHandle>) {
    ui.vertical_centered(|ui| {
        ui.add_space(6.0);
        ui.label(RichText::new(d.title.as_str()).size(20.0).strong());

        // "⭐ 7.3/10 • 1998"
        let mut line = d.badge.text.clone();
        if d.year != UNKNOWN_DATE {
            line.push_str(&format!(" • {}", d.year));
        }
        let color = if d.badge.positive { SUCCESS } else { TEXT_SECONDARY };
        ui.label(RichText::new(line).size(14.0).color(color));

        ui.add_space(10.0);
        match (&d.poster, tex) {
            (PosterView::Absent, _) => {}
            (PosterView::Loaded(_), Some(tex)) => {
                ui.image((tex.id(), tex.size_vec2()));
            }
            _ => no_image_box(ui),
        }
    });

    ui.add_space(12.0);
    ui.label(RichText::new("Overview").size(16.0).strong());
    ui.add_space(6.0);
    ui.label(RichText::new(d.overview.as_str()).size(13.0));
}

fn no_image_box(ui: &mut eg::Ui) {
    let size = eg::vec2(POSTER_MAX_W as f32, POSTER_MAX_H as f32);
    let (rect, _resp) = ui.allocate_exact_size(size, eg::Sense::hover());
    ui.painter().rect_filled(rect, 6.0, BORDER);
    ui.painter().text(
        rect.center(),
        eg::Align2::CENTER_CENTER,
        "No Image Available",
        eg::FontId::proportional(13.0),
        TEXT_SECONDARY,
    );
}
