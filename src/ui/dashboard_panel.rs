//! Dashboard view UI rendering
//!
//! Shows the four summary cards, the cash flow trend chart, the insights text
//! and the recommended product for a completed analysis.

use eframe::egui;
use egui::{RichText, Stroke};
use finsight::{with_alpha, AnalysisReport, DashboardSummary, ThemeColors, Translations};
use std::path::PathBuf;
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::trend_chart;
use crate::ui::{cards, dialogs};

const CHART_HEIGHT: f32 = 300.0;
const CARD_MIN_HEIGHT: f32 = 120.0;

/// Result of user interaction with the dashboard
pub enum DashboardInteraction {
    /// A destination for the text report was chosen
    ExportReportRequested(PathBuf),
    /// The user wants to analyze another statement
    NewAnalysisRequested,
}

/// Renders the dashboard for the current report
///
/// Draws nothing if no report is available.
pub fn render_dashboard_panel(ui: &mut egui::Ui, state: &AppState) -> Option<DashboardInteraction> {
    let report = state.flow.report()?;
    let t = state.form.translations();
    let colors = state.theme.colors();
    let summary = DashboardSummary::new(report, t);
    let mut interaction = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.columns(4, |columns| {
                render_score_card(&mut columns[0], &summary, t, colors);
                render_cash_flow_card(&mut columns[1], &summary, t, colors);
                render_debt_tax_card(&mut columns[2], &summary, t, colors);
                render_risks_card(&mut columns[3], &summary, t, colors);
            });

            ui.add_space(16.0);

            ui.columns(2, |columns| {
                render_chart_card(&mut columns[0], report, t, colors);
                render_insights_card(&mut columns[1], &summary, t, colors);
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button(format!("⬇ {}", t.download_report)).clicked() {
                    if let Some(path) = dialogs::pick_report_destination(state.last_directory.as_deref()) {
                        interaction = Some(DashboardInteraction::ExportReportRequested(path));
                    }
                }
                if ui.button(t.new_analysis).clicked() {
                    interaction = Some(DashboardInteraction::NewAnalysisRequested);
                }
            });
        });

    interaction
}

fn render_score_card(ui: &mut egui::Ui, summary: &DashboardSummary, t: &Translations, colors: &ThemeColors) {
    cards::card_frame(colors).show(ui, |ui| {
        ui.set_min_height(CARD_MIN_HEIGHT);
        ui.set_width(ui.available_width());
        cards::card_title(ui, t.health_score, colors);
        ui.label(
            RichText::new(&summary.score_text)
                .size(30.0)
                .strong()
                .color(color_mapping::tone_color(summary.score_tone, colors)),
        );
        ui.label(RichText::new(&summary.status_text).color(colors.text_dim));
    });
}

fn render_cash_flow_card(ui: &mut egui::Ui, summary: &DashboardSummary, t: &Translations, colors: &ThemeColors) {
    cards::card_frame(colors).show(ui, |ui| {
        ui.set_min_height(CARD_MIN_HEIGHT);
        ui.set_width(ui.available_width());
        cards::card_title(ui, t.net_cash_flow, colors);
        ui.label(
            RichText::new(&summary.net_cash_flow_text)
                .size(24.0)
                .strong()
                .color(color_mapping::tone_color(summary.net_cash_flow_tone, colors)),
        );
        ui.label(RichText::new(&summary.revenue_text).color(color_mapping::revenue_color(colors)));
        ui.label(RichText::new(&summary.expenses_text).color(color_mapping::expense_color(colors)));
    });
}

fn render_debt_tax_card(ui: &mut egui::Ui, summary: &DashboardSummary, t: &Translations, colors: &ThemeColors) {
    cards::card_frame(colors).show(ui, |ui| {
        ui.set_min_height(CARD_MIN_HEIGHT);
        ui.set_width(ui.available_width());
        cards::card_title(ui, t.debt_tax, colors);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}:", t.debt)).color(colors.text_dim));
            ui.label(RichText::new(&summary.debt_text).strong().color(colors.text_strong));
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}:", t.tax)).color(colors.text_dim));
            ui.label(
                RichText::new(&summary.tax_text)
                    .strong()
                    .color(color_mapping::tone_color(summary.tax_tone, colors)),
            );
        });
    });
}

fn render_risks_card(ui: &mut egui::Ui, summary: &DashboardSummary, t: &Translations, colors: &ThemeColors) {
    cards::card_frame(colors).show(ui, |ui| {
        ui.set_min_height(CARD_MIN_HEIGHT);
        ui.set_width(ui.available_width());
        cards::card_title(ui, t.risks, colors);
        if summary.has_risks() {
            for risk in &summary.risks {
                ui.label(RichText::new(format!("⚠ {}", risk)).color(colors.danger));
            }
        } else {
            ui.label(RichText::new(format!("✔ {}", t.no_risks)).color(colors.success));
        }
    });
}

fn render_chart_card(ui: &mut egui::Ui, report: &AnalysisReport, t: &Translations, colors: &ThemeColors) {
    cards::card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(t.cash_flow_trend).size(16.0).strong().color(colors.text_strong));
        ui.add_space(8.0);
        trend_chart::render_trend_chart(ui, &report.metrics.monthly_trend, CHART_HEIGHT, colors, t);
    });
}

fn render_insights_card(ui: &mut egui::Ui, summary: &DashboardSummary, t: &Translations, colors: &ThemeColors) {
    cards::card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(format!("✨ {}", t.ai_insights)).size(16.0).strong().color(colors.text_strong));
        ui.add_space(8.0);

        // Insights arrive as multi-line plain text
        egui::ScrollArea::vertical()
            .id_salt("insights_scroll")
            .max_height(CHART_HEIGHT - 80.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&summary.insights).color(colors.text));
            });

        ui.add_space(12.0);
        ui.label(RichText::new(t.rec_products).strong().color(colors.text_strong));

        egui::Frame::NONE
            .fill(with_alpha(colors.success, 24))
            .stroke(Stroke::new(1.0, with_alpha(colors.success, 96)))
            .corner_radius(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(t.working_capital_loan).strong().color(colors.success));
                ui.label(RichText::new(&summary.loan_offer).color(colors.text));
            });
    });
}
