//! Theme persistence and application.

use crate::app::AppState;
use finsight::DEFAULT_THEME;

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the stored theme name, or the default theme when none is stored.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|s| s.get_string(THEME_KEY))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so a theme change from the header takes effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let manager = state.theme.theme_manager();
        let theme = manager.get_theme_or_default(state.theme.current_theme_name());

        let mut visuals = if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        manager.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
