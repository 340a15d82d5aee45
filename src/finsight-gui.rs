//! FinSight desktop client
//!
//! Uploads a bank statement to the analysis backend and shows the returned
//! financial health dashboard. The viewer features:
//! - Upload view with business type selection and drag-and-drop
//! - Background upload so the window stays responsive while the backend works
//! - Dashboard with summary cards, a cash flow trend chart and insights
//! - English and Hindi labels, switchable at any time
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Chart scale calculations
//! - `presentation/` - Visual styling and color mapping (separated from domain logic)
//! - `io/` - Background upload to the analysis backend
//! - `ui/` - UI panel rendering, dialogs and keyboard shortcuts
//! - `rendering/` - Low-level painter rendering for the trend chart
//! - `state/` - State management for the flow, the form and the theme

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;
use finsight::AnalysisClient;
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

mod app;
mod config;
mod domain;
mod presentation;
mod io;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, BackendLinks, FontCoordinator, SettingsCoordinator, ThemeCoordinator};
use config::Args;
use io::AsyncUploader;
use state::FormState;
use ui::panel_manager::{PanelInteraction, PanelManager};

const LAST_DIRECTORY_KEY: &str = "last_directory";

/// Main application entry point that initializes and launches the FinSight GUI.
fn main() -> eframe::Result {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let client = match AnalysisClient::new(args.client_config()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    info!("Analysis endpoint: {}", client.config().endpoint());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 560.0])
            .with_drag_and_drop(true)
            .with_title("FinSight"),
        ..Default::default()
    };

    eframe::run_native(
        "FinSight",
        options,
        Box::new(move |cc| Ok(Box::new(FinsightApp::new(cc, args, client)))),
    )
}

/// The main FinSight application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles the upload workflow and report export
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct FinsightApp {
    /// Centralized application state
    state: AppState,
    /// Background statement uploader
    uploader: AsyncUploader,
    /// Optional statement to preselect on the first frame
    pending_file: Option<PathBuf>,
}

impl FinsightApp {
    /// Creates the application with preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, args: Args, client: AnalysisClient) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let last_directory: Option<PathBuf> =
            SettingsCoordinator::try_load_setting(cc.storage, LAST_DIRECTORY_KEY);

        FontCoordinator::install_fallback_fonts(&cc.egui_ctx);

        let links = BackendLinks {
            endpoint: client.config().endpoint(),
            sample_url: args.sample_url.clone(),
        };
        let form = FormState::new(args.language, args.business_type);

        Self {
            state: AppState::new(form, links).with_preferences(theme_name, last_directory),
            uploader: AsyncUploader::new(Arc::new(client)),
            pending_file: args.file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::ToggleLanguageRequested => {
                ApplicationCoordinator::toggle_language(&mut self.state);
            }
            PanelInteraction::FileChosen(path) => {
                ApplicationCoordinator::select_file(&mut self.state, path);
            }
            PanelInteraction::SubmitRequested => {
                ApplicationCoordinator::submit(&mut self.state, &mut self.uploader, ctx);
            }
            PanelInteraction::ExportReportRequested(path) => {
                ApplicationCoordinator::export_report(&mut self.state, path);
            }
            PanelInteraction::NewAnalysisRequested => {
                ApplicationCoordinator::new_analysis(&mut self.state);
            }
        }
    }
}

impl eframe::App for FinsightApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAST_DIRECTORY_KEY, &self.state.last_directory);
    }

    /// Main update loop:
    /// 1. Check for upload completion
    /// 2. Apply theme
    /// 3. Preselect the command-line statement
    /// 4. Handle keyboard shortcuts
    /// 5. Render all panels via PanelManager and handle their interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_upload_completion(&mut self.state, &mut self.uploader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Only on the first frame
        if let Some(path) = self.pending_file.take() {
            ApplicationCoordinator::select_file(&mut self.state, path);
        }

        if let Some(interaction) = ui::input::shortcuts::handle_shortcuts(ctx, &self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
