//! Upload view UI rendering
//!
//! The statement picker, the business type selector, the analyze button,
//! the last error and the sample statement link.

use eframe::egui;
use egui::{RichText, Stroke};
use finsight::BusinessType;
use std::path::PathBuf;
use crate::app::AppState;
use crate::ui::{cards, dialogs};

const PANEL_WIDTH: f32 = 560.0;

/// Result of user interaction with the upload view
pub enum UploadInteraction {
    /// A statement was picked in the file dialog
    FileChosen(PathBuf),
    /// The analyze button was clicked
    SubmitRequested,
}

/// Renders the upload card centered in the available area
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `drop_hovered` - True while a file is dragged over the window
pub fn render_upload_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    drop_hovered: bool,
) -> Option<UploadInteraction> {
    let mut interaction = None;
    let t = state.form.translations();
    let colors = state.theme.colors().clone();

    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(PANEL_WIDTH);

        cards::card_frame(&colors).inner_margin(32.0).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("⬆").size(40.0).color(colors.accent));
                ui.add_space(8.0);
                ui.heading(t.upload_title);
                ui.add_space(4.0);
                ui.label(RichText::new(t.upload_desc).color(colors.text_dim));
                ui.add_space(24.0);

                // File selector, doubling as the drop target
                let file_label = state
                    .flow
                    .file()
                    .map(|f| f.file_name.clone())
                    .unwrap_or_else(|| t.select_file.to_string());
                let stroke_color = if drop_hovered { colors.accent } else { colors.border };
                let picker = egui::Button::new(RichText::new(file_label).size(15.0))
                    .stroke(Stroke::new(1.5, stroke_color))
                    .fill(colors.background);
                if ui
                    .add_sized([ui.available_width(), 72.0], picker)
                    .clicked()
                {
                    if let Some(path) = dialogs::pick_statement(state.last_directory.as_deref()) {
                        interaction = Some(UploadInteraction::FileChosen(path));
                    }
                }

                ui.add_space(20.0);

                ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
                    ui.label(RichText::new(t.business_type).color(colors.text_dim));
                    let selected = state.form.business_type();
                    let width = ui.available_width();
                    egui::ComboBox::from_id_salt("business_type")
                        .selected_text(selected.label())
                        .width(width)
                        .show_ui(ui, |ui| {
                            for business_type in BusinessType::ALL {
                                ui.selectable_value(
                                    state.form.business_type_mut(),
                                    business_type,
                                    business_type.label(),
                                );
                            }
                        });
                });

                ui.add_space(20.0);

                let analyze = egui::Button::new(
                    RichText::new(t.analyze_btn).size(16.0).strong().color(colors.text_strong),
                )
                .fill(colors.accent);
                if ui.add_sized([ui.available_width(), 44.0], analyze).clicked() {
                    interaction = Some(UploadInteraction::SubmitRequested);
                }

                if let Some(error) = state.flow.error() {
                    ui.add_space(12.0);
                    ui.label(RichText::new(error).color(colors.danger));
                }

                ui.add_space(24.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(t.sample_prefix).color(colors.text_dim));
                    ui.hyperlink_to(t.sample_link, &state.links.sample_url);
                });
            });
        });
    });

    interaction
}
