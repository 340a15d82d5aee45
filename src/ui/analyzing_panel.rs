//! Analyzing view UI rendering

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the spinner shown while the backend works on the statement
pub fn render_analyzing_panel(ui: &mut egui::Ui, state: &AppState) {
    let t = state.form.translations();
    let colors = state.theme.colors();

    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.add(egui::Spinner::new().size(50.0).color(colors.accent));
        ui.add_space(32.0);
        ui.heading(t.analyzing_title);
        ui.label(RichText::new(t.analyzing_desc).color(colors.text_dim));
        if let Some(file) = state.flow.file() {
            ui.add_space(8.0);
            ui.label(RichText::new(&file.file_name).italics().color(colors.text_dim));
        }
    });
}
