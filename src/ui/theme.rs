//! Theme and styling for the FlexNotes UI
//!
//! This module provides colors, fonts, and visual styling for the application.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary accent color (buttons, borders, navbar title)
    pub primary: Color32,
    /// Destructive/recording accent
    pub danger: Color32,

    /// Background colors
    pub bg_app: Color32,
    pub bg_card: Color32,
    pub bg_navbar: Color32,

    /// Prompter screen colors
    pub prompter_bg: Color32,
    pub prompter_text: Color32,
    pub prompter_controls_bg: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    /// Text drawn on top of the primary accent
    pub text_on_primary: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards
    pub card_rounding: Rounding,

    /// Card border stroke (orange outline on every card)
    pub card_stroke: Stroke,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The FlexNotes dark theme: orange on warm dark gray.
    pub fn dark() -> Self {
        let primary = Color32::from_rgb(255, 140, 0); // Orange

        Self {
            primary,
            danger: Color32::from_rgb(255, 68, 68), // Red

            bg_app: Color32::from_rgb(39, 36, 37),  // Warm dark gray
            bg_card: Color32::from_rgb(30, 27, 28), // Darker card fill
            bg_navbar: Color32::BLACK,

            prompter_bg: Color32::BLACK,
            prompter_text: Color32::WHITE,
            prompter_controls_bg: Color32::from_rgb(30, 30, 30),

            text_primary: Color32::from_rgb(255, 255, 255),
            text_secondary: Color32::from_rgb(204, 204, 204),
            text_muted: Color32::from_rgb(102, 102, 102),
            text_on_primary: Color32::BLACK,

            button_rounding: Rounding::same(8.0),
            card_rounding: Rounding::same(12.0),

            card_stroke: Stroke::new(2.0, primary),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        // Panel backgrounds
        visuals.panel_fill = self.bg_app;
        visuals.window_fill = self.bg_card;
        visuals.extreme_bg_color = self.bg_card;

        // Widget colors
        visuals.widgets.noninteractive.bg_fill = self.bg_card;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_card;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.8);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Text selection
        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        // Window styling
        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = self.card_stroke;

        ctx.set_visuals(visuals);

        ctx.set_fonts(egui::FontDefinitions::default());

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
