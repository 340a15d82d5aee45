//! Low-level painter-based rendering.

pub mod trend_chart;
