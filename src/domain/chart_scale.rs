//! Scale calculations for the cash flow trend chart.
//!
//! This module provides pure functions for:
//! - Choosing a rounded upper bound and tick step for the value axis
//! - Converting between point indices, values and screen coordinates
//!
//! These functions are stateless and can be tested independently.

use finsight::MonthlyPoint;

/// Number of horizontal grid intervals on the value axis.
pub const VALUE_TICKS: usize = 4;

/// Value axis of the chart: always starts at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub max: f64,
    pub step: f64,
}

impl ValueAxis {
    /// Fits an axis to the largest credit or debit of the trend.
    pub fn for_trend(points: &[MonthlyPoint]) -> Self {
        let largest = points
            .iter()
            .flat_map(|p| [p.credit, p.debit])
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);

        let step = nice_step(largest / VALUE_TICKS as f64);
        Self {
            max: step * VALUE_TICKS as f64,
            step,
        }
    }

    /// Tick values from zero to the axis maximum.
    pub fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=VALUE_TICKS).map(move |i| self.step * i as f64)
    }
}

/// Rounds a raw tick interval up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Converts a point index to an X coordinate; a single point sits in the middle.
pub fn index_to_x(index: usize, count: usize, plot_rect: egui::Rect) -> f32 {
    if count <= 1 {
        return plot_rect.center().x;
    }
    let normalized = index as f32 / (count - 1) as f32;
    plot_rect.left() + normalized * plot_rect.width()
}

/// Converts a value to a Y coordinate; zero is the bottom edge.
pub fn value_to_y(value: f64, axis: &ValueAxis, plot_rect: egui::Rect) -> f32 {
    if axis.max <= 0.0 {
        return plot_rect.bottom();
    }
    let normalized = (value / axis.max).clamp(0.0, 1.0) as f32;
    plot_rect.bottom() - normalized * plot_rect.height()
}

/// Returns the index of the point closest to an X coordinate.
pub fn nearest_index(x: f32, count: usize, plot_rect: egui::Rect) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if count == 1 {
        return Some(0);
    }
    let normalized = ((x - plot_rect.left()) / plot_rect.width()).clamp(0.0, 1.0);
    Some((normalized * (count - 1) as f32).round() as usize)
}

/// Compact tick label: 12,000 → "12k", 1,500,000 → "1.5M".
pub fn compact_label(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "k")
    } else {
        (value, "")
    };
    let text = format!("{:.1}", scaled);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", text, suffix)
}
