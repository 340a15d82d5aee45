//! Analysis document returned by the backend.
//!
//! The client never computes any of these values; it only decodes and displays them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Readiness value the backend uses for credit-ready statements.
pub const READINESS_HIGH: &str = "High";

/// Tax status the backend reports when tax debits were found.
pub const TAX_PAYMENTS_DETECTED: &str = "Tax Payments Detected";

/// Successful response of `POST /analyze-file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: Metrics,
    #[serde(default)]
    pub insights: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Health score, 0 to 100.
    pub score: f64,
    pub readiness: String,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_cash_flow: f64,
    #[serde(default)]
    pub debt_obligations: Option<f64>,
    #[serde(default)]
    pub tax_compliance: String,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
}

impl Metrics {
    pub fn is_credit_ready(&self) -> bool {
        self.readiness == READINESS_HIGH
    }

    pub fn tax_payments_detected(&self) -> bool {
        self.tax_compliance == TAX_PAYMENTS_DETECTED
    }

    pub fn debt_or_zero(&self) -> f64 {
        self.debt_obligations.unwrap_or(0.0)
    }
}

/// One month of aggregated credits and debits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Month end as `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub credit: f64,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub net_cash_flow: f64,
}

impl MonthlyPoint {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let date_part = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Short month name for chart ticks, or the raw date when it does not parse.
    pub fn month_label(&self) -> String {
        self.parsed_date()
            .map(|d| d.format("%b").to_string())
            .unwrap_or_else(|| self.date.clone())
    }
}
