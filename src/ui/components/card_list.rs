//! Home screen card list
//!
//! A "create new" button followed by one row per card, each with edit and
//! delete actions and a two-line body preview.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Stroke, Vec2};

/// What the user asked for this frame; applied by the caller after the list
/// is done rendering.
enum ListAction {
    Create,
    Edit(usize),
    Delete(usize),
}

pub struct CardList<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> CardList<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let mut action = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(self.theme.spacing);

                if self.show_create_button(ui) {
                    action = Some(ListAction::Create);
                }
                ui.add_space(self.theme.spacing_sm);

                for (index, card) in self.state.collection.cards().iter().enumerate() {
                    if let Some(row_action) =
                        self.show_card_row(ui, index, &card.title, &card.content)
                    {
                        action = Some(row_action);
                    }
                    ui.add_space(self.theme.spacing_sm);
                }

                ui.add_space(self.theme.spacing);
            });

        match action {
            Some(ListAction::Create) => self.state.open_editor(None),
            Some(ListAction::Edit(index)) => self.state.open_editor(Some(index)),
            Some(ListAction::Delete(index)) => self.state.delete_card(index),
            None => {}
        }
    }

    fn show_create_button(&self, ui: &mut egui::Ui) -> bool {
        let mut clicked = false;

        egui::Frame::none()
            .fill(self.theme.bg_card)
            .rounding(self.theme.card_rounding)
            .stroke(Stroke::new(2.0, self.theme.primary.gamma_multiply(0.6)))
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    let label = RichText::new("＋  Create New")
                        .size(16.0)
                        .strong()
                        .color(self.theme.primary);
                    if ui
                        .add(egui::Button::new(label).frame(false))
                        .clicked()
                    {
                        clicked = true;
                    }
                });
            });

        clicked
    }

    fn show_card_row(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        title: &str,
        content: &str,
    ) -> Option<ListAction> {
        let mut action = None;

        egui::Frame::none()
            .fill(self.theme.bg_card)
            .rounding(self.theme.card_rounding)
            .stroke(self.theme.card_stroke)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(ui.available_width() - 90.0);

                        ui.label(
                            RichText::new(title)
                                .size(16.0)
                                .strong()
                                .color(self.theme.text_primary),
                        );

                        if !content.is_empty() {
                            ui.label(
                                RichText::new(preview(content))
                                    .size(14.0)
                                    .color(self.theme.text_secondary),
                            );
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        let delete = egui::Button::new(
                            RichText::new("🗑").size(18.0).color(self.theme.danger),
                        )
                        .min_size(Vec2::splat(32.0))
                        .frame(false);
                        if ui.add(delete).on_hover_text("Delete card").clicked() {
                            action = Some(ListAction::Delete(index));
                        }

                        let edit = egui::Button::new(
                            RichText::new("✏").size(18.0).color(self.theme.text_primary),
                        )
                        .min_size(Vec2::splat(32.0))
                        .frame(false);
                        if ui.add(edit).on_hover_text("Edit card").clicked() {
                            action = Some(ListAction::Edit(index));
                        }
                    });
                });
            });

        action
    }
}

/// Two-line-ish preview: first lines of the body, ellipsized.
fn preview(content: &str) -> String {
    const MAX_CHARS: usize = 120;

    let flat: String = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_CHARS {
        return flat;
    }

    let truncated: String = flat.chars().take(MAX_CHARS).collect();
    format!("{truncated}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("buy milk"), "buy milk");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_preview_ellipsizes_long_text() {
        let long = "word ".repeat(60);
        let p = preview(&long);
        assert!(p.ends_with('…'));
        assert!(p.chars().count() <= 121);
    }
}
