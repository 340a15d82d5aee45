//! Color mapping for dashboard figures.
//!
//! Maps the tones computed by `DashboardSummary` onto the current theme's
//! palette, so the widgets never hard-code colors.

use egui::Color32;
use finsight::{ThemeColors, Tone};

/// Returns the color for a figure's tone.
pub fn tone_color(tone: Tone, colors: &ThemeColors) -> Color32 {
    match tone {
        Tone::Positive => colors.success,
        Tone::Caution => colors.warning,
        Tone::Negative => colors.danger,
        Tone::Neutral => colors.text,
    }
}

/// Color of the revenue (credit) series and figures.
pub fn revenue_color(colors: &ThemeColors) -> Color32 {
    colors.success
}

/// Color of the expense (debit) series and figures.
pub fn expense_color(colors: &ThemeColors) -> Color32 {
    colors.danger
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsight::ThemeManager;

    #[test]
    fn test_tones_follow_palette() {
        let manager = ThemeManager::new();
        let colors = &manager.get_theme_or_default("Midnight").colors;
        assert_eq!(tone_color(Tone::Positive, colors), colors.success);
        assert_eq!(tone_color(Tone::Caution, colors), colors.warning);
        assert_eq!(tone_color(Tone::Negative, colors), colors.danger);
        assert_eq!(tone_color(Tone::Neutral, colors), colors.text);
        assert_eq!(revenue_color(colors), colors.success);
        assert_eq!(expense_color(colors), colors.danger);
    }
}
