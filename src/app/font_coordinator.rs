//! Font fallback for Devanagari labels.
//!
//! egui's bundled fonts have no Devanagari glyphs, so the Hindi table would
//! render as boxes. On startup the first readable system font from a short
//! list of well-known locations is appended to both font families.

use std::path::Path;
use std::sync::Arc;

const DEVANAGARI_FONT_NAME: &str = "devanagari";

const DEVANAGARI_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSansDevanagari-Regular.ttf",
    "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
    "/usr/share/fonts/truetype/fonts-deva-extra/kalimati.ttf",
    "/System/Library/Fonts/Supplemental/DevanagariMT.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\Nirmala.ttf",
    "C:\\Windows\\Fonts\\mangal.ttf",
];

pub struct FontCoordinator;

impl FontCoordinator {
    /// Installs a Devanagari fallback font if one is found on this system.
    pub fn install_fallback_fonts(ctx: &egui::Context) {
        let Some((path, bytes)) = Self::find_devanagari_font() else {
            log::warn!("No Devanagari font found; Hindi labels may not render");
            return;
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            DEVANAGARI_FONT_NAME.to_owned(),
            Arc::new(egui::FontData::from_owned(bytes)),
        );
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.push(DEVANAGARI_FONT_NAME.to_owned());
            }
        }
        ctx.set_fonts(fonts);
        log::info!("Loaded Devanagari font from {}", path);
    }

    fn find_devanagari_font() -> Option<(&'static str, Vec<u8>)> {
        DEVANAGARI_FONT_CANDIDATES
            .iter()
            .filter(|p| Path::new(p).is_file())
            .find_map(|p| std::fs::read(p).ok().map(|bytes| (*p, bytes)))
    }
}
