//! GUI implementation with egui/eframe
//!
//! This module provides the desktop user interface for FlexNotes using the
//! eframe framework.

mod app;
mod components;
mod state;
mod theme;

pub use app::FlexNotesApp;
pub use state::{AppState, EditorState, Screen};
pub use theme::Theme;

/// Run the FlexNotes application
pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 600.0])
            .with_title("FlexNotes"),
        ..Default::default()
    };

    eframe::run_native(
        "FlexNotes",
        options,
        Box::new(|cc| Ok(Box::new(FlexNotesApp::new(cc)))),
    )
}
