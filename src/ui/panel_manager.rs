//! Panel orchestration and layout management.
//!
//! Coordinates the header, the status bar and the view for the current step,
//! and funnels their interactions to the application coordinator.

use crate::app::AppState;
use crate::state::Step;
use crate::ui::{analyzing_panel, dashboard_panel, header, status_bar, upload_panel};
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInteraction {
    /// User clicked the language toggle
    ToggleLanguageRequested,
    /// A statement was picked or dropped on the window
    FileChosen(PathBuf),
    /// User asked to analyze the selected statement
    SubmitRequested,
    /// User chose where to save the text report
    ExportReportRequested(PathBuf),
    /// User asked to start over from the upload view
    NewAnalysisRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let panel_fill = state.theme.colors().background;

        // Header panel at the top
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(8.0))
            .show(ctx, |ui| {
                if let Some(header_interaction) = header::render_header(ui, state) {
                    interaction = Some(match header_interaction {
                        header::HeaderInteraction::ToggleLanguageRequested => {
                            PanelInteraction::ToggleLanguageRequested
                        }
                    });
                }
            });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let drop_hovered = state.flow.step() == Step::Upload
            && ctx.input(|i| !i.raw.hovered_files.is_empty());

        let central_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(16))
            .fill(panel_fill);

        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| match state.flow.step() {
                Step::Upload => {
                    if let Some(upload_interaction) =
                        upload_panel::render_upload_panel(ui, state, drop_hovered)
                    {
                        interaction = Some(match upload_interaction {
                            upload_panel::UploadInteraction::FileChosen(path) => {
                                PanelInteraction::FileChosen(path)
                            }
                            upload_panel::UploadInteraction::SubmitRequested => {
                                PanelInteraction::SubmitRequested
                            }
                        });
                    }
                }
                Step::Analyzing => analyzing_panel::render_analyzing_panel(ui, state),
                Step::Dashboard => {
                    if let Some(dashboard_interaction) =
                        dashboard_panel::render_dashboard_panel(ui, state)
                    {
                        interaction = Some(match dashboard_interaction {
                            dashboard_panel::DashboardInteraction::ExportReportRequested(path) => {
                                PanelInteraction::ExportReportRequested(path)
                            }
                            dashboard_panel::DashboardInteraction::NewAnalysisRequested => {
                                PanelInteraction::NewAnalysisRequested
                            }
                        });
                    }
                }
            });

        if interaction.is_none() && state.flow.step() == Step::Upload {
            interaction = Self::take_dropped_file(ctx).map(PanelInteraction::FileChosen);
        }

        interaction
    }

    /// Returns the first file dropped on the window this frame, if any.
    fn take_dropped_file(ctx: &egui::Context) -> Option<PathBuf> {
        ctx.input(|i| i.raw.dropped_files.iter().find_map(|file| file.path.clone()))
    }
}
