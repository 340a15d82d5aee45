//! Centralized application state for the FinSight client.
//!
//! Composes focused state components, each owning one aspect of the UI:
//! the upload flow, the request parameters and the theme.

use crate::state::{FlowState, FormState, ThemeState};
use std::path::PathBuf;

/// Backend locations shown and linked by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendLinks {
    /// Full URL of the analysis endpoint
    pub endpoint: String,
    /// URL of the downloadable sample statement
    pub sample_url: String,
}

/// Main application state composed of focused state components.
pub struct AppState {
    /// Upload → analyzing → dashboard flow
    pub flow: FlowState,

    /// Language and business type sent with each upload
    pub form: FormState,

    /// Theme and styling state
    pub theme: ThemeState,

    pub links: BackendLinks,

    /// Directory the file pickers open in (persisted preference)
    pub last_directory: Option<PathBuf>,

    /// Transient message for the status bar (report saved, export failed)
    pub notice: Option<String>,
}

impl AppState {
    /// Creates a new application state on the upload step.
    pub fn new(form: FormState, links: BackendLinks) -> Self {
        Self {
            flow: FlowState::new(),
            form,
            theme: ThemeState::new(),
            links,
            last_directory: None,
            notice: None,
        }
    }

    /// Applies preferences restored from storage.
    pub fn with_preferences(mut self, theme_name: String, last_directory: Option<PathBuf>) -> Self {
        self.theme = ThemeState::with_theme(theme_name);
        self.last_directory = last_directory;
        self
    }
}

#[cfg(test)]
impl AppState {
    pub(crate) fn for_tests() -> Self {
        Self::new(
            FormState::default(),
            BackendLinks {
                endpoint: "http://127.0.0.1:8000/analyze-file".to_string(),
                sample_url: finsight::DEFAULT_SAMPLE_URL.to_string(),
            },
        )
    }
}
