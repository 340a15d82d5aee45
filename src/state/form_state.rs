//! Request parameter state management.
//!
//! Holds the two user-chosen values sent with every upload: the display
//! language (also used for the labels) and the business type.

use finsight::{BusinessType, Language, Translations};

#[derive(Debug, Clone, Copy, Default)]
pub struct FormState {
    language: Language,
    business_type: BusinessType,
}

impl FormState {
    pub fn new(language: Language, business_type: BusinessType) -> Self {
        Self {
            language,
            business_type,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn business_type(&self) -> BusinessType {
        self.business_type
    }

    /// Label table for the current language.
    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    /// Returns a mutable reference to the business type (for the combo box).
    pub(crate) fn business_type_mut(&mut self) -> &mut BusinessType {
        &mut self.business_type
    }
}
