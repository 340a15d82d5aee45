//! Parameters sent alongside the uploaded statement.

use crate::i18n::Language;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Business category forwarded to the backend as `business_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BusinessType {
    #[default]
    Retail,
    Manufacturing,
    Agri,
    Services,
    Logistics,
    Ecommerce,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 7] = [
        BusinessType::Retail,
        BusinessType::Manufacturing,
        BusinessType::Agri,
        BusinessType::Services,
        BusinessType::Logistics,
        BusinessType::Ecommerce,
        BusinessType::Other,
    ];

    /// Value of the multipart `business_type` field.
    pub fn form_value(self) -> &'static str {
        match self {
            BusinessType::Retail => "Retail",
            BusinessType::Manufacturing => "Manufacturing",
            BusinessType::Agri => "Agri",
            BusinessType::Services => "Services",
            BusinessType::Logistics => "Logistics",
            BusinessType::Ecommerce => "Ecommerce",
            BusinessType::Other => "Other",
        }
    }

    /// Label shown in the business type selector.
    pub fn label(self) -> &'static str {
        match self {
            BusinessType::Retail => "Retail Store / Shop",
            BusinessType::Manufacturing => "Manufacturing / Factory",
            BusinessType::Agri => "Agriculture / Farming",
            BusinessType::Services => "Service Business",
            BusinessType::Logistics => "Logistics / Transport",
            BusinessType::Ecommerce => "E-commerce / Online Store",
            BusinessType::Other => "Other",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

impl FromStr for BusinessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessType::ALL
            .iter()
            .copied()
            .find(|b| b.form_value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown business type '{}'", s))
    }
}

/// The attachment picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl SelectedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = display_name(&path);
        Self { path, file_name }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Everything needed for one `analyze-file` call.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub business_type: BusinessType,
    pub language: Language,
}
