//! State management modules for the FinSight client.
//!
//! This module contains state-only logic (no UI concerns):
//! - Flow state (current step, selected file, last report, last error)
//! - Form state (language, business type)
//! - Theme state (theme manager, current theme)

mod flow_state;
mod form_state;
mod theme_state;

pub use flow_state::{FlowState, Step};
pub use form_state::FormState;
pub use theme_state::ThemeState;
