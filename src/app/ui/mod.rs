// src/app/ui/mod.rs
pub mod list;
pub mod searchbar;

use eframe::egui::{self as eg, Color32, RichText};
use egui_extras::{Size, StripBuilder};

use super::types::NoticeKind;

// ---- palette ----
pub(crate) const ACCENT: Color32 = Color32::from_rgb(0x43, 0x61, 0xee);
pub(crate) const SECONDARY: Color32 = Color32::from_rgb(0x72, 0x09, 0xb7);
pub(crate) const SUCCESS: Color32 = Color32::from_rgb(0x38, 0xb0, 0x00);
pub(crate) const WARNING: Color32 = Color32::from_rgb(0xe0, 0x9f, 0x00);
pub(crate) const DANGER: Color32 = Color32::from_rgb(0xd0, 0x31, 0x2d);
pub(crate) const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6c, 0x75, 0x7d);
pub(crate) const BORDER: Color32 = Color32::from_rgb(0xde, 0xe2, 0xe6);
pub(crate) const CARD_BG: Color32 = Color32::WHITE;

const LIST_WIDTH: f32 = 380.0;

impl crate::app::MovieRecApp {
    pub(crate) fn ui_render(&mut self, ctx: &eg::Context) {
        // a notice is modal: everything behind it is disabled
        let blocked = self.ctl.state.notice.is_some();

        eg::TopBottomPanel::top("header")
            .frame(eg::Frame::none().fill(ACCENT).inner_margin(eg::Margin::symmetric(20.0, 15.0)))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("🎬 Movie Recommendation Finder")
                        .size(22.0)
                        .strong()
                        .color(Color32::WHITE),
                );
            });

        eg::TopBottomPanel::bottom("status_bar")
            .frame(eg::Frame::none().fill(BORDER).inner_margin(eg::Margin::symmetric(10.0, 4.0)))
            .show(ctx, |ui| {
                ui.label(RichText::new(&self.ctl.state.status).size(12.0).color(TEXT_SECONDARY));
            });

        eg::TopBottomPanel::bottom("footer")
            .show_separator_line(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Data provided by TMDb").size(11.0).color(TEXT_SECONDARY));
                });
            });

        eg::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                self.ui_render_searchbar(ui);
                ui.add_space(12.0);

                StripBuilder::new(ui)
                    .size(Size::exact(LIST_WIDTH))
                    .size(Size::exact(15.0))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.cell(|ui| self.ui_render_list(ui));
                        strip.empty();
                        strip.cell(|ui| self.ui_render_detail(ui));
                    });
            });
        });

        self.ui_render_notice(ctx);
    }

    // ---------- BLOCKING NOTICE ----------
    fn ui_render_notice(&mut self, ctx: &eg::Context) {
        let Some(notice) = self.ctl.state.notice.clone() else {
            return;
        };
        let (icon, color) = match notice.kind {
            NoticeKind::Info => ("ℹ", ACCENT),
            NoticeKind::Warning => ("⚠", WARNING),
            NoticeKind::Error => ("❌", DANGER),
        };

        let mut dismiss = false;
        eg::Window::new(notice.title.as_str())
            .id(eg::Id::new("notice_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(eg::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).size(22.0).color(color));
                    ui.label(notice.body.as_str());
                });
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("   OK   ").clicked() {
                        dismiss = true;
                    }
                });
            });

        // Enter is left alone: it may be the keypress that raised this notice.
        if ctx.input(|i| i.key_pressed(eg::Key::Escape)) {
            dismiss = true;
        }
        if dismiss {
            self.ctl.dismiss_notice();
            self.focus_query = true;
        }
    }
}
