//! Theme state management.
//!
//! Tracks which built-in palette is active. Names coming from storage are
//! validated so a stale preference never leaves the UI without colors.

use finsight::{ThemeColors, ThemeManager, DEFAULT_THEME};

pub struct ThemeState {
    theme_manager: ThemeManager,
    /// Always the name of a registered theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }

    /// Creates a theme state from a stored preference, falling back to the default theme.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            DEFAULT_THEME.to_string()
        };

        Self {
            theme_manager,
            current_theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Returns the palette of the current theme.
    pub fn colors(&self) -> &ThemeColors {
        &self
            .theme_manager
            .get_theme_or_default(&self.current_theme_name)
            .colors
    }

    /// Activates a theme by name. Unknown names are ignored.
    pub fn set_theme(&mut self, theme_name: String) {
        if self.theme_manager.get_theme(&theme_name).is_some() {
            self.current_theme_name = theme_name;
        }
    }
}
