//! Presentation layer for visual styling and color mapping.
//!
//! Keeps color decisions out of both the view-model and the widgets.

pub mod color_mapping;
