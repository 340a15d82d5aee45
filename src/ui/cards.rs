//! Shared card styling for the upload and dashboard views.

use eframe::egui;
use egui::{RichText, Stroke};
use finsight::ThemeColors;

/// Rounded panel with the theme's card background.
pub fn card_frame(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::NONE
        .fill(colors.card_background)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(12.0)
        .inner_margin(16.0)
}

/// Small dimmed caption at the top of a card.
pub fn card_title(ui: &mut egui::Ui, title: &str, colors: &ThemeColors) {
    ui.label(RichText::new(title).size(13.0).color(colors.text_dim));
}
