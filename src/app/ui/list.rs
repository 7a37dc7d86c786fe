// src/app/ui/list.rs
use eframe::egui::{self as eg, RichText};

use super::{CARD_BG, TEXT_SECONDARY};

const ROW_H: f32 = 24.0;

impl crate::app::MovieRecApp {
    pub(crate) fn ui_render_list(&mut self, ui: &mut eg::Ui) {
        ui.label(RichText::new("Recommendations").size(14.0).strong());
        ui.add_space(4.0);

        let labels = self.ctl.state.list_labels();
        let selected = self.ctl.state.selected;
        let mut clicked: Option<usize> = None;

        eg::Frame::group(ui.style()).fill(CARD_BG).show(ui, |ui| {
            eg::ScrollArea::vertical()
                .id_source("recommendation_list")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if let Some(text) = &self.ctl.state.list_placeholder {
                        ui.label(RichText::new(text.as_str()).italics().color(TEXT_SECONDARY));
                    }
                    for (i, label) in labels.iter().enumerate() {
                        let is_sel = selected == Some(i);
                        let resp = ui.add_sized(
                            [ui.available_width(), ROW_H],
                            eg::SelectableLabel::new(is_sel, label.as_str()),
                        );
                        if resp.clicked() {
                            clicked = Some(i);
                        }
                    }
                });
        });

        // Arrow keys step through the list when no text field has focus.
        let keys_free = self.ctl.state.notice.is_none() && ui.memory(|m| m.focused().is_none());
        if clicked.is_none() && !labels.is_empty() && keys_free {
            let (up, down) = ui.input(|i| {
                (i.key_pressed(eg::Key::ArrowUp), i.key_pressed(eg::Key::ArrowDown))
            });
            let cur = selected.unwrap_or(0);
            if down {
                clicked = Some((cur + 1).min(labels.len() - 1));
            } else if up {
                clicked = Some(cur.saturating_sub(1));
            }
        }

        if let Some(i) = clicked {
            self.ctl.select(i);
        }
    }
}
