//! Application-level modules for the FinSight client.
//!
//! This module contains the workflow coordinator, the centralized state and
//! the coordinators for persisted preferences and fonts.

mod app_state;
mod application_coordinator;
mod theme_coordinator;
mod settings_coordinator;
mod font_coordinator;

pub use app_state::{AppState, BackendLinks};
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
pub use font_coordinator::FontCoordinator;
