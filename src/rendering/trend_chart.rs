//! Cash flow trend chart rendering
//!
//! Draws monthly credit (revenue) and debit (expense) lines with a value grid,
//! month labels, a legend and a hover readout of the nearest month.

use eframe::egui;
use egui::{Align2, Color32, FontId, Stroke};
use finsight::format::format_amount;
use finsight::{MonthlyPoint, ThemeColors, Translations};

use crate::domain::chart_scale::{self, ValueAxis};
use crate::presentation::color_mapping;

/// Space reserved left of the plot for value labels
const Y_LABEL_WIDTH: f32 = 44.0;
/// Space reserved below the plot for month labels
const X_LABEL_HEIGHT: f32 = 20.0;
/// Space reserved above the plot for the legend
const LEGEND_HEIGHT: f32 = 18.0;

/// Renders the trend chart into a fixed-height area of the current layout
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `points` - Monthly aggregates in chronological order
/// * `height` - Total height of the chart area, labels included
/// * `colors` - Color palette for the current theme
/// * `t` - Labels for the legend and the empty state
pub fn render_trend_chart(
    ui: &mut egui::Ui,
    points: &[MonthlyPoint],
    height: f32,
    colors: &ThemeColors,
    t: &Translations,
) {
    let (response, painter) = ui.allocate_painter(
        egui::vec2(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let full_rect = response.rect;

    if points.is_empty() {
        painter.text(
            full_rect.center(),
            Align2::CENTER_CENTER,
            t.no_trend,
            FontId::proportional(14.0),
            colors.text_dim,
        );
        return;
    }

    let plot_rect = egui::Rect::from_min_max(
        egui::pos2(full_rect.left() + Y_LABEL_WIDTH, full_rect.top() + LEGEND_HEIGHT),
        egui::pos2(full_rect.right() - 8.0, full_rect.bottom() - X_LABEL_HEIGHT),
    );
    let axis = ValueAxis::for_trend(points);
    let revenue_color = color_mapping::revenue_color(colors);
    let expense_color = color_mapping::expense_color(colors);

    render_legend(&painter, full_rect, t, revenue_color, expense_color, colors.text_dim);

    // Horizontal grid with value labels
    for value in axis.ticks() {
        let y = chart_scale::value_to_y(value, &axis, plot_rect);
        painter.line_segment(
            [egui::pos2(plot_rect.left(), y), egui::pos2(plot_rect.right(), y)],
            Stroke::new(1.0, colors.grid),
        );
        painter.text(
            egui::pos2(plot_rect.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            chart_scale::compact_label(value),
            FontId::proportional(10.0),
            colors.text_dim,
        );
    }

    // Vertical grid and month labels
    for (i, point) in points.iter().enumerate() {
        let x = chart_scale::index_to_x(i, points.len(), plot_rect);
        painter.line_segment(
            [egui::pos2(x, plot_rect.top()), egui::pos2(x, plot_rect.bottom())],
            Stroke::new(1.0, colors.grid.gamma_multiply(0.5)),
        );
        painter.text(
            egui::pos2(x, plot_rect.bottom() + 4.0),
            Align2::CENTER_TOP,
            point.month_label(),
            FontId::proportional(10.0),
            colors.text_dim,
        );
    }

    draw_series(&painter, points, &axis, plot_rect, |p| p.credit, revenue_color);
    draw_series(&painter, points, &axis, plot_rect, |p| p.debit, expense_color);

    if let Some(hover_pos) = response.hover_pos() {
        if plot_rect.expand(4.0).contains(hover_pos) {
            if let Some(index) = chart_scale::nearest_index(hover_pos.x, points.len(), plot_rect) {
                render_hover_readout(&painter, points, index, plot_rect, colors, t);
            }
        }
    }
}

fn draw_series(
    painter: &egui::Painter,
    points: &[MonthlyPoint],
    axis: &ValueAxis,
    plot_rect: egui::Rect,
    value: impl Fn(&MonthlyPoint) -> f64,
    color: Color32,
) {
    let positions: Vec<egui::Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            egui::pos2(
                chart_scale::index_to_x(i, points.len(), plot_rect),
                chart_scale::value_to_y(value(p), axis, plot_rect),
            )
        })
        .collect();

    if positions.len() > 1 {
        painter.add(egui::Shape::line(positions.clone(), Stroke::new(2.0, color)));
    }
    for pos in positions {
        painter.circle_filled(pos, 3.0, color);
    }
}

fn render_legend(
    painter: &egui::Painter,
    full_rect: egui::Rect,
    t: &Translations,
    revenue_color: Color32,
    expense_color: Color32,
    text_color: Color32,
) {
    let y = full_rect.top() + LEGEND_HEIGHT / 2.0;
    let mut x = full_rect.left() + Y_LABEL_WIDTH;

    for (label, color) in [(t.revenue, revenue_color), (t.expenses, expense_color)] {
        painter.line_segment([egui::pos2(x, y), egui::pos2(x + 14.0, y)], Stroke::new(2.0, color));
        let galley_rect = painter.text(
            egui::pos2(x + 18.0, y),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(11.0),
            text_color,
        );
        x = galley_rect.right() + 16.0;
    }
}

fn render_hover_readout(
    painter: &egui::Painter,
    points: &[MonthlyPoint],
    index: usize,
    plot_rect: egui::Rect,
    colors: &ThemeColors,
    t: &Translations,
) {
    let Some(point) = points.get(index) else {
        return;
    };
    let x = chart_scale::index_to_x(index, points.len(), plot_rect);

    painter.line_segment(
        [egui::pos2(x, plot_rect.top()), egui::pos2(x, plot_rect.bottom())],
        Stroke::new(1.0, colors.text_dim),
    );

    let text = format!(
        "{}\n{}: {}\n{}: {}",
        point.date,
        t.revenue,
        format_amount(point.credit),
        t.expenses,
        format_amount(point.debit)
    );

    // Keep the box inside the plot: flip to the left half past the midpoint
    let (anchor, offset) = if x > plot_rect.center().x {
        (Align2::RIGHT_TOP, -8.0)
    } else {
        (Align2::LEFT_TOP, 8.0)
    };
    let galley = painter.layout_no_wrap(text, FontId::proportional(11.0), colors.text);
    let text_pos = egui::pos2(x + offset, plot_rect.top() + 4.0);
    let text_rect = anchor.anchor_size(text_pos, galley.size());

    painter.rect_filled(text_rect.expand(4.0), 4.0, colors.card_background);
    painter.galley(text_rect.min, galley, colors.text);
}
