//! Teleprompter screen
//!
//! Full-screen dark reader. While the session runs, the scroll offset is
//! forced each frame with immediate (non-animated) jump semantics; while
//! paused, the user's drag position is reported back into the session so a
//! resume continues from wherever they left it.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Vec2};
use std::time::Instant;

pub struct PrompterView<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> PrompterView<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// The scrolling text area.
    pub fn show_text(&mut self, ui: &mut egui::Ui) {
        let Some(session) = &mut self.state.prompter else {
            return;
        };

        session.tick(Instant::now());
        let running = session.is_running();
        let forced_offset = session.offset();

        let viewport_height = ui.available_height();

        let mut area = egui::ScrollArea::vertical()
            .id_salt("prompter_scroll")
            .auto_shrink([false, false]);
        if running {
            // Immediate jump each step; no interpolation
            area = area.vertical_scroll_offset(forced_offset);
        }

        let output = area.show(ui, |ui| {
            // Text starts mid-screen and runs out past the end, the way a
            // prompter leads and trails its copy
            ui.add_space(viewport_height / 2.5);

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(self.state.prompter_text.as_str())
                        .size(42.0)
                        .strong()
                        .color(self.theme.prompter_text),
                );
            });

            ui.add_space(viewport_height / 2.0);
        });

        if !running {
            // Adopt manual drags so a resume picks up from here
            if let Some(session) = &mut self.state.prompter {
                session.sync_manual_offset(output.state.offset.y);
            }
        }

        if running {
            ui.ctx().request_repaint();
        }
    }

    /// Bottom control bar: slower / play-pause / faster.
    pub fn show_controls(&mut self, ui: &mut egui::Ui) {
        let Some(session) = &mut self.state.prompter else {
            return;
        };

        ui.add_space(self.theme.spacing_sm);
        ui.columns(3, |columns| {
            columns[0].vertical_centered(|ui| {
                let slower = egui::Button::new(
                    RichText::new("➖").size(26.0).color(self.theme.primary),
                )
                .frame(false)
                .min_size(Vec2::splat(48.0));
                if ui.add(slower).on_hover_text("Scroll slower").clicked() {
                    session.slower();
                }
            });

            columns[1].vertical_centered(|ui| {
                let icon = if session.is_running() { "⏸" } else { "▶" };
                let play = egui::Button::new(
                    RichText::new(icon).size(30.0).color(self.theme.text_on_primary),
                )
                .fill(self.theme.primary)
                .rounding(egui::Rounding::same(35.0))
                .min_size(Vec2::splat(64.0));
                if ui.add(play).clicked() {
                    session.toggle(Instant::now());
                }
            });

            columns[2].vertical_centered(|ui| {
                let faster = egui::Button::new(
                    RichText::new("➕").size(26.0).color(self.theme.primary),
                )
                .frame(false)
                .min_size(Vec2::splat(48.0));
                if ui.add(faster).on_hover_text("Scroll faster").clicked() {
                    session.faster();
                }
            });
        });
        ui.add_space(self.theme.spacing_sm);
    }

    /// Close button, drawn over the text area.
    pub fn show_close_button(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let close = egui::Button::new(
                RichText::new("✖")
                    .size(24.0)
                    .color(self.theme.prompter_text.gamma_multiply(0.5)),
            )
            .frame(false)
            .min_size(Vec2::splat(40.0));

            if ui.add(close).on_hover_text("Close prompter").clicked() {
                self.state.close_prompter();
            }
        });
    }
}
