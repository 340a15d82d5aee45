//! Plain-text export of a dashboard.

use crate::analysis::AnalysisReport;
use crate::format::format_amount;
use crate::i18n::Translations;
use crate::summary::DashboardSummary;
use std::fmt::Write;

/// Default file name offered by the save dialog.
pub const DEFAULT_REPORT_NAME: &str = "financial_health_report.txt";

/// Renders the same content the dashboard shows as a text document.
pub fn render_report(report: &AnalysisReport, t: &Translations) -> String {
    let summary = DashboardSummary::new(report, t);
    let metrics = &report.metrics;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", t.title);
    let _ = writeln!(out, "{}", "=".repeat(t.title.chars().count()));
    if let Some(business_type) = &metrics.business_type {
        let _ = writeln!(out, "{}: {}", t.business_type, business_type);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}: {}", t.health_score, summary.score_text);
    let _ = writeln!(out, "{}", summary.status_text);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}: {}", t.net_cash_flow, summary.net_cash_flow_text);
    let _ = writeln!(out, "  {}", summary.revenue_text);
    let _ = writeln!(out, "  {}", summary.expenses_text);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.debt_tax);
    let _ = writeln!(out, "  {}: {}", t.debt, summary.debt_text);
    let _ = writeln!(out, "  {}: {}", t.tax, summary.tax_text);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.risks);
    if summary.has_risks() {
        for risk in &summary.risks {
            let _ = writeln!(out, "  - {}", risk);
        }
    } else {
        let _ = writeln!(out, "  {}", t.no_risks);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.cash_flow_trend);
    if metrics.monthly_trend.is_empty() {
        let _ = writeln!(out, "  {}", t.no_trend);
    } else {
        let _ = writeln!(out, "  {:<12} {:>14} {:>14}", "", t.revenue, t.expenses);
        for point in &metrics.monthly_trend {
            let _ = writeln!(
                out,
                "  {:<12} {:>14} {:>14}",
                point.date,
                format_amount(point.credit),
                format_amount(point.debit)
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.ai_insights);
    let _ = writeln!(out, "{}", summary.insights.trim_end());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t.rec_products);
    let _ = writeln!(out, "  {}: {}", t.working_capital_loan, summary.loan_offer);

    out
}
