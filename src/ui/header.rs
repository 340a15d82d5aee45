//! Header panel UI rendering
//!
//! Handles the top bar with the application title, the language toggle and the theme selector.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked the language toggle button
    ToggleLanguageRequested,
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let t = state.form.translations();
    let accent = state.theme.colors().accent;

    ui.horizontal(|ui| {
        ui.label(RichText::new(t.title).size(20.0).strong().color(accent));

        // Push controls to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(t.switch_btn).clicked() {
                interaction = Some(HeaderInteraction::ToggleLanguageRequested);
            }

            ui.separator();

            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    interaction
}
