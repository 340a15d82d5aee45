//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the FinSight client:
//! - Header panel (title, language toggle, theme selector)
//! - Upload view (statement picker, business type, analyze button)
//! - Analyzing view (progress spinner)
//! - Dashboard view (summary cards, trend chart, insights)
//! - Status bar (endpoint, selected file, notices)
//! - Panel manager (panel orchestration and layout)
//! - Dialogs and keyboard shortcuts

pub mod header;
pub mod upload_panel;
pub mod analyzing_panel;
pub mod dashboard_panel;
pub mod status_bar;
pub mod cards;
pub mod dialogs;
pub mod panel_manager;
pub mod input;
