//! Input handling subsystem for UI interactions.
//!
//! This module contains keyboard shortcut handling; pointer input is handled
//! by the widgets themselves.

pub mod shortcuts;
