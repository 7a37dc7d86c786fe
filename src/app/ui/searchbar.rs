// src/app/ui/searchbar.rs
use eframe::egui::{self as eg, Color32, RichText};

use super::{ACCENT, SECONDARY};
use crate::app::state::SubmitOutcome;

const BUTTONS_W: f32 = 230.0;

impl crate::app::MovieRecApp {
    // ---------- SEARCH BAR ----------
    pub(crate) fn ui_render_searchbar(&mut self, ui: &mut eg::Ui) {
        let busy = self.ctl.state.busy;
        let mut submit = false;
        let mut clear = false;

        ui.label(RichText::new("Find similar movies:").size(14.0).strong());
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let resp = ui.add_enabled(
                !busy,
                eg::TextEdit::singleline(&mut self.ctl.state.query)
                    .hint_text("Movie title…")
                    .font(eg::FontId::proportional(15.0))
                    .desired_width((ui.available_width() - BUTTONS_W).max(160.0)),
            );
            if self.focus_query && !busy {
                resp.request_focus();
                self.focus_query = false;
            }
            if resp.lost_focus() && ui.input(|i| i.key_pressed(eg::Key::Enter)) {
                submit = true;
            }

            let search_btn = eg::Button::new(
                RichText::new("Get Recommendations").strong().color(Color32::WHITE),
            )
            .fill(ACCENT)
            .min_size(eg::vec2(0.0, 30.0));
            if ui.add_enabled(!busy, search_btn).clicked() {
                submit = true;
            }

            let clear_btn = eg::Button::new(RichText::new("✕").color(Color32::WHITE))
                .fill(SECONDARY)
                .min_size(eg::vec2(30.0, 30.0));
            if ui
                .add_enabled(!busy, clear_btn)
                .on_hover_text("Clear search")
                .clicked()
            {
                clear = true;
            }
        });

        ui.add_space(8.0);
        // indeterminate: sweep the bar while busy
        let fill = if busy {
            (ui.input(|i| i.time) as f32 * 0.6) % 1.0
        } else {
            0.0
        };
        ui.horizontal(|ui| {
            if busy {
                ui.add(eg::Spinner::new().size(14.0));
            }
            ui.add(eg::ProgressBar::new(fill).desired_width(ui.available_width()));
        });

        if submit && self.ctl.submit() == SubmitOutcome::Rejected {
            self.focus_query = true;
        }
        if clear {
            self.ctl.clear();
            self.focus_query = true;
        }
    }
}
