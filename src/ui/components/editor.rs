//! Card editor screen
//!
//! Title and body fields, a mic toggle for dictation, save/back header, and
//! the prompter entry footer (shown only when editing an existing card).

use crate::cards::TITLE_MAX_CHARS;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Stroke, Vec2};

pub struct Editor<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> Editor<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Header bar: back on the left, save on the right.
    pub fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let back = egui::Button::new(
                RichText::new("←").size(20.0).color(self.theme.text_primary),
            )
            .frame(false)
            .min_size(Vec2::splat(36.0));
            if ui.add(back).on_hover_text("Back without saving").clicked() {
                self.state.close_editor();
                return;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let can_save = !self.state.editor.title.trim().is_empty();
                let color = if can_save {
                    self.theme.primary
                } else {
                    self.theme.text_muted
                };

                let save = egui::Button::new(
                    RichText::new("Save").size(16.0).strong().color(color),
                )
                .frame(false);
                if ui.add(save).clicked() {
                    self.state.save_editor();
                }
            });
        });
    }

    /// Main form: title field, body field with mic toggle.
    pub fn show_form(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(self.theme.spacing);

                ui.label(
                    RichText::new("Title")
                        .size(16.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.add_space(self.theme.spacing_sm);
                self.show_title_input(ui);

                ui.add_space(self.theme.spacing_lg);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Text")
                            .size(16.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    if self.state.editor.recording {
                        ui.label(
                            RichText::new("(Listening…)")
                                .size(14.0)
                                .color(self.theme.danger),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.show_mic_button(ui);
                    });
                });
                ui.add_space(self.theme.spacing_sm);
                self.show_body_input(ui);

                ui.add_space(self.theme.spacing);
            });
    }

    /// Footer with the prompter entry; only rendered when editing an
    /// existing card.
    pub fn show_footer(&mut self, ui: &mut egui::Ui) {
        ui.add_space(self.theme.spacing_sm);
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(
                RichText::new("▶  USE AS PROMPTER")
                    .size(16.0)
                    .strong()
                    .color(self.theme.text_on_primary),
            )
            .fill(self.theme.primary)
            .rounding(self.theme.button_rounding)
            .min_size(Vec2::new(ui.available_width(), 48.0));

            if ui.add(button).clicked() {
                self.state.open_prompter();
            }
        });
        ui.add_space(self.theme.spacing_sm);
    }

    fn show_title_input(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_card)
            .rounding(self.theme.button_rounding)
            .stroke(self.theme.card_stroke)
            .inner_margin(self.theme.spacing_sm)
            .show(ui, |ui| {
                let title_edit = egui::TextEdit::singleline(&mut self.state.editor.title)
                    .hint_text("Enter the title…")
                    .char_limit(TITLE_MAX_CHARS)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Heading)
                    .margin(egui::Margin::symmetric(8.0, 6.0));
                ui.add(title_edit);
            });
    }

    fn show_body_input(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_card)
            .rounding(self.theme.button_rounding)
            .stroke(self.theme.card_stroke)
            .inner_margin(self.theme.spacing_sm)
            .show(ui, |ui| {
                let body_edit = egui::TextEdit::multiline(&mut self.state.editor.content)
                    .hint_text("Press the microphone to dictate, or type here…")
                    .desired_width(f32::INFINITY)
                    .desired_rows(14)
                    .font(egui::TextStyle::Body)
                    .margin(egui::Margin::symmetric(8.0, 6.0));
                ui.add(body_edit);
            });
    }

    fn show_mic_button(&mut self, ui: &mut egui::Ui) {
        let is_recording = self.state.editor.recording;

        let (icon, tooltip, color) = if is_recording {
            ("🎙", "Stop dictation", self.theme.danger)
        } else {
            ("🎤", "Dictate into the note", self.theme.primary)
        };

        let button = egui::Button::new(RichText::new(icon).size(18.0).color(color))
            .min_size(Vec2::splat(36.0))
            .rounding(self.theme.button_rounding)
            .frame(false);

        let response = ui.add(button);
        let button_rect = response.rect;

        if response.on_hover_text(tooltip).clicked() {
            self.state.toggle_dictation();
        }

        // Pulsing ring while listening
        if is_recording {
            let t = ui.ctx().input(|i| i.time);
            let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;

            let painter = ui.painter();
            let center = button_rect.center();
            let radius = button_rect.width() / 2.0 + 2.0 + pulse * 3.0;

            painter.circle_stroke(
                center,
                radius,
                Stroke::new(2.0 * pulse, self.theme.danger.gamma_multiply(1.0 - pulse * 0.5)),
            );

            ui.ctx().request_repaint();
        }
    }
}
