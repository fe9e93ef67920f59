//! Main application struct and eframe integration
//!
//! This module contains the FlexNotesApp that implements eframe::App and
//! routes between the Home, Editor, and Prompter screens.

use crate::cards::CardStore;
use crate::dictation::{DictationCommand, DictationPipeline, NullBackend};
use crate::ui::components::{CardList, Editor, PrompterView};
use crate::ui::state::{AppState, Screen};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use tracing::warn;

/// Main FlexNotes application
pub struct FlexNotesApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
}

impl FlexNotesApp {
    /// Create the application: apply the theme, open the card store, and
    /// start the dictation worker.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        let state = match CardStore::open_default() {
            Ok(store) => AppState::with_store(store),
            Err(e) => {
                // Run memory-only; every save would fail the same way
                warn!("Card store unavailable, notes will not persist: {}", e);
                AppState::new()
            }
        };

        let dictation = DictationPipeline::new().start_worker(NullBackend);
        let state = state.with_dictation(dictation);

        Self { state, theme }
    }

    fn show_home(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_navbar)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("FlexNotes")
                        .size(25.0)
                        .strong()
                        .color(self.theme.primary),
                );
            });

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_app)
                    .inner_margin(egui::Margin::symmetric(20.0, 0.0)),
            )
            .show(ctx, |ui| {
                CardList::new(&mut self.state, &self.theme).show(ui);
            });
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("editor_header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_app)
                    .inner_margin(egui::Margin::symmetric(20.0, 12.0)),
            )
            .show(ctx, |ui| {
                Editor::new(&mut self.state, &self.theme).show_header(ui);
            });

        // Prompter entry exists only for cards that are already saved
        if self.state.editor.index.is_some() {
            TopBottomPanel::bottom("editor_footer")
                .frame(
                    egui::Frame::none()
                        .fill(self.theme.bg_card)
                        .inner_margin(egui::Margin::symmetric(20.0, 10.0)),
                )
                .show(ctx, |ui| {
                    Editor::new(&mut self.state, &self.theme).show_footer(ui);
                });
        }

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_app)
                    .inner_margin(egui::Margin::symmetric(20.0, 0.0)),
            )
            .show(ctx, |ui| {
                Editor::new(&mut self.state, &self.theme).show_form(ui);
            });
    }

    fn show_prompter(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("prompter_controls")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.prompter_controls_bg)
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| {
                PrompterView::new(&mut self.state, &self.theme).show_controls(ui);
            });

        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.prompter_bg))
            .show(ctx, |ui| {
                PrompterView::new(&mut self.state, &self.theme).show_close_button(ui);
                PrompterView::new(&mut self.state, &self.theme).show_text(ui);
            });
    }

    /// Modal notice with a single dismiss action.
    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(self.theme.text_primary));
                ui.add_space(self.theme.spacing_sm);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.state.notice = None;
        }
    }
}

impl eframe::App for FlexNotesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver pending dictation events onto the UI queue
        self.state.poll_events();

        match self.state.screen {
            Screen::Home => self.show_home(ctx),
            Screen::Editor => self.show_editor(ctx),
            Screen::Prompter => self.show_prompter(ctx),
        }

        self.show_notice(ctx);

        // Keep frames (and prompter ticks) coming while anything animates
        let prompter_running = self
            .state
            .prompter
            .as_ref()
            .is_some_and(|s| s.is_running());
        if prompter_running || self.state.editor.recording {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(handle) = &self.state.dictation {
            let _ = handle.send(DictationCommand::Shutdown);
        }
        self.state.persist();
    }
}
