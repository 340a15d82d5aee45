//! Text and tone of every dashboard widget, derived from one analysis report.
//!
//! Keeping this out of the UI code lets the dashboard and the exported report
//! show exactly the same figures.

use crate::analysis::AnalysisReport;
use crate::format::{format_amount, format_currency, format_score};
use crate::i18n::Translations;

/// Score above which the health score is shown as positive.
pub const GOOD_SCORE_THRESHOLD: f64 = 70.0;

/// Visual weight of a figure; mapped to theme colors by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub score_text: String,
    pub score_tone: Tone,
    pub status_text: String,
    pub net_cash_flow_text: String,
    pub net_cash_flow_tone: Tone,
    pub revenue_text: String,
    pub expenses_text: String,
    pub debt_text: String,
    pub tax_text: String,
    pub tax_tone: Tone,
    pub risks: Vec<String>,
    pub insights: String,
    pub loan_offer: String,
}

impl DashboardSummary {
    pub fn new(report: &AnalysisReport, t: &Translations) -> Self {
        let metrics = &report.metrics;

        let score_tone = if metrics.score > GOOD_SCORE_THRESHOLD {
            Tone::Positive
        } else {
            Tone::Caution
        };

        let readiness = if metrics.is_credit_ready() {
            t.credit_ready
        } else {
            t.needs_improvement
        };

        let net_cash_flow_tone = if metrics.net_cash_flow > 0.0 {
            Tone::Positive
        } else if metrics.net_cash_flow < 0.0 {
            Tone::Negative
        } else {
            Tone::Neutral
        };

        let (tax_text, tax_tone) = if metrics.tax_payments_detected() {
            (t.tax_detected.to_string(), Tone::Positive)
        } else {
            (metrics.tax_compliance.clone(), Tone::Caution)
        };

        Self {
            score_text: format!("{}/100", format_score(metrics.score)),
            score_tone,
            status_text: format!("{}: {}", t.status, readiness),
            net_cash_flow_text: format_currency(metrics.net_cash_flow),
            net_cash_flow_tone,
            revenue_text: format!("{}: {}", t.revenue, format_amount(metrics.total_revenue)),
            expenses_text: format!("{}: {}", t.expenses, format_amount(metrics.total_expenses)),
            debt_text: format_currency(metrics.debt_or_zero()),
            tax_text,
            tax_tone,
            risks: metrics.risks.clone(),
            insights: report.insights.clone(),
            loan_offer: t
                .loan_desc
                .replace("{revenue}", &format_currency(metrics.total_revenue)),
        }
    }

    pub fn has_risks(&self) -> bool {
        !self.risks.is_empty()
    }
}
