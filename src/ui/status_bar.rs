//! Status bar UI rendering
//!
//! Handles the bottom status bar showing the backend endpoint, the selected
//! statement and the last notice.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let colors = state.theme.colors();

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Backend: {}", state.links.endpoint)).strong());

        if let Some(file) = state.flow.file() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("File: {}", file.file_name)).strong());
        }

        if let Some(notice) = &state.notice {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(notice).strong().color(colors.warning));
        }
    });
}
