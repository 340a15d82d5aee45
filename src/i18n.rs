//! Static translation table for the two supported display languages.
//!
//! The selected language is also forwarded to the backend so the generated
//! insights come back in the same language.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Value of the multipart `language` field.
    pub fn form_value(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::English => &ENGLISH,
            Language::Hindi => &HINDI,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            _ => Err(format!("unsupported language '{}'", s)),
        }
    }
}

/// Every label the client renders.
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    /// Label of the toggle button; names the language it switches to.
    pub switch_btn: &'static str,
    pub upload_title: &'static str,
    pub upload_desc: &'static str,
    pub select_file: &'static str,
    pub business_type: &'static str,
    pub analyze_btn: &'static str,
    pub sample_prefix: &'static str,
    pub sample_link: &'static str,
    pub analyzing_title: &'static str,
    pub analyzing_desc: &'static str,
    pub health_score: &'static str,
    pub status: &'static str,
    pub credit_ready: &'static str,
    pub needs_improvement: &'static str,
    pub net_cash_flow: &'static str,
    pub revenue: &'static str,
    pub expenses: &'static str,
    pub debt_tax: &'static str,
    pub debt: &'static str,
    pub tax: &'static str,
    pub tax_detected: &'static str,
    pub risks: &'static str,
    pub no_risks: &'static str,
    pub cash_flow_trend: &'static str,
    pub no_trend: &'static str,
    pub ai_insights: &'static str,
    pub rec_products: &'static str,
    pub working_capital_loan: &'static str,
    /// Contains a `{revenue}` placeholder.
    pub loan_desc: &'static str,
    pub download_report: &'static str,
    pub new_analysis: &'static str,
}

pub static ENGLISH: Translations = Translations {
    title: "FinSight SME Health Check",
    switch_btn: "हिंदी",
    upload_title: "Upload Financial Statement",
    upload_desc: "Upload your bank statement or ledger (CSV/XLSX) to get an instant credit-readiness assessment.",
    select_file: "Click or drop a file to select a statement",
    business_type: "Business Type",
    analyze_btn: "Analyze Financial Health",
    sample_prefix: "Try with sample data:",
    sample_link: "Download sample statement",
    analyzing_title: "Analyzing your finances...",
    analyzing_desc: "Calculating cash flow, detecting risks and generating insights.",
    health_score: "Financial Health Score",
    status: "Status",
    credit_ready: "Credit Ready",
    needs_improvement: "Needs Improvement",
    net_cash_flow: "Net Cash Flow",
    revenue: "Revenue",
    expenses: "Expenses",
    debt_tax: "Debt & Tax",
    debt: "Debt / EMI Payments",
    tax: "Tax Compliance",
    tax_detected: "Tax Payments Detected",
    risks: "Risk Alerts",
    no_risks: "No major risks detected",
    cash_flow_trend: "Cash Flow Trend",
    no_trend: "No monthly data available",
    ai_insights: "AI Financial Insights",
    rec_products: "Recommended Products",
    working_capital_loan: "Working Capital Loan",
    loan_desc: "Eligible for a credit line based on your revenue of {revenue}.",
    download_report: "Download Report",
    new_analysis: "Analyze Another File",
};

pub static HINDI: Translations = Translations {
    title: "फिनसाइट एसएमई स्वास्थ्य जांच",
    switch_btn: "English",
    upload_title: "वित्तीय विवरण अपलोड करें",
    upload_desc: "तुरंत क्रेडिट-तैयारी मूल्यांकन के लिए अपना बैंक स्टेटमेंट या खाता बही (CSV/XLSX) अपलोड करें।",
    select_file: "स्टेटमेंट चुनने के लिए क्लिक करें या फ़ाइल यहाँ छोड़ें",
    business_type: "व्यवसाय का प्रकार",
    analyze_btn: "वित्तीय स्वास्थ्य का विश्लेषण करें",
    sample_prefix: "नमूना डेटा के साथ आज़माएँ:",
    sample_link: "नमूना स्टेटमेंट डाउनलोड करें",
    analyzing_title: "आपके वित्त का विश्लेषण हो रहा है...",
    analyzing_desc: "नकदी प्रवाह की गणना, जोखिमों की पहचान और सुझाव तैयार किए जा रहे हैं।",
    health_score: "वित्तीय स्वास्थ्य स्कोर",
    status: "स्थिति",
    credit_ready: "क्रेडिट के लिए तैयार",
    needs_improvement: "सुधार की आवश्यकता",
    net_cash_flow: "शुद्ध नकदी प्रवाह",
    revenue: "आय",
    expenses: "खर्च",
    debt_tax: "ऋण और कर",
    debt: "ऋण / ईएमआई भुगतान",
    tax: "कर अनुपालन",
    tax_detected: "कर भुगतान पाए गए",
    risks: "जोखिम चेतावनियाँ",
    no_risks: "कोई बड़ा जोखिम नहीं मिला",
    cash_flow_trend: "नकदी प्रवाह रुझान",
    no_trend: "मासिक डेटा उपलब्ध नहीं है",
    ai_insights: "एआई वित्तीय सुझाव",
    rec_products: "सुझाए गए उत्पाद",
    working_capital_loan: "कार्यशील पूंजी ऋण",
    loan_desc: "आपकी {revenue} की आय के आधार पर क्रेडिट लाइन के लिए पात्र।",
    download_report: "रिपोर्ट डाउनलोड करें",
    new_analysis: "दूसरी फ़ाइल का विश्लेषण करें",
};
