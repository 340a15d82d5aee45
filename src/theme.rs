//! Theme support module for the FinSight dashboard
//!
//! This module provides the color schemes used by the upload screen and the dashboard cards.
//! It includes built-in themes (Midnight, Dark, Light) and a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use finsight::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let midnight = manager.get_theme("Midnight").unwrap();
//! println!("Midnight accent: {:?}", midnight.colors.accent);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when nothing is stored.
pub const DEFAULT_THEME: &str = "Midnight";

/// Complete color palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub card_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic colors (score, cash flow, risks, chart lines)
    pub accent: Color32,
    pub accent_secondary: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub grid: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Midnight".to_string(), midnight_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Light".to_string(), light_theme());

        Self {
            themes,
            fallback: midnight_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn get_theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.card_background;
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.card_background;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.card_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.inactive.weak_bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.selection;
        visuals.widgets.hovered.weak_bg_fill = colors.selection;
        visuals.widgets.active.bg_fill = colors.accent;

        visuals.hyperlink_color = colors.accent;

        visuals.error_fg_color = colors.danger;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Slate panels with violet accents; the default palette
fn midnight_theme() -> Theme {
    Theme {
        name: "Midnight".to_string(),
        description: "Slate background with violet accents".to_string(),
        dark: true,
        colors: ThemeColors {
            background: hex_to_color32("#0f172a"),
            panel_background: hex_to_color32("#0f172a"),
            card_background: hex_to_color32("#1e293b"),

            text: hex_to_color32("#f8fafc"),
            text_dim: hex_to_color32("#94a3b8"),
            text_strong: hex_to_color32("#ffffff"),

            selection: hex_to_color32("#4c1d95"),
            hover: hex_to_color32("#334155"),
            border: hex_to_color32("#334155"),

            accent: hex_to_color32("#8b5cf6"),
            accent_secondary: hex_to_color32("#06b6d4"),
            success: hex_to_color32("#10b981"),
            warning: hex_to_color32("#f59e0b"),
            danger: hex_to_color32("#ef4444"),
            grid: hex_to_color32("#334155"),
        },
    }
}

/// Creates the Dark theme using egui defaults
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        dark: true,
        colors: ThemeColors {
            background: Color32::from_rgb(16, 16, 16),
            panel_background: Color32::from_rgb(39, 39, 39),
            card_background: Color32::from_rgb(52, 52, 52),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            accent: Color32::from_rgb(52, 152, 219),
            accent_secondary: Color32::from_rgb(26, 188, 156),
            success: Color32::from_rgb(46, 204, 113),
            warning: Color32::from_rgb(243, 156, 18),
            danger: Color32::from_rgb(231, 76, 60),
            grid: Color32::from_rgb(80, 80, 80),
        },
    }
}

/// Creates the Light theme using egui defaults
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        dark: false,
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(248, 248, 248),
            card_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            accent: Color32::from_rgb(109, 40, 217),
            accent_secondary: Color32::from_rgb(0, 160, 180),
            success: Color32::from_rgb(40, 160, 40),
            warning: Color32::from_rgb(200, 120, 0),
            danger: Color32::from_rgb(200, 40, 40),
            grid: Color32::from_rgb(210, 210, 210),
        },
    }
}

/// Converts a hex color string (like "#0f172a") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
