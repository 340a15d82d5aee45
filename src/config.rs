//! Command-line and environment configuration.

use clap::Parser;
use finsight::{BusinessType, ClientConfig, Language, DEFAULT_API_BASE, DEFAULT_SAMPLE_URL};
use std::path::PathBuf;

/// Upload a financial statement and view its health dashboard.
#[derive(Parser, Debug, Clone)]
#[command(name = "finsight-gui", version, about)]
pub struct Args {
    /// Statement (CSV/XLSX) to preselect on startup
    pub file: Option<PathBuf>,

    /// Base URL of the analysis backend
    #[arg(long, env = "FINSIGHT_API_URL", default_value = DEFAULT_API_BASE)]
    pub api_url: String,

    /// URL of the downloadable sample statement
    #[arg(long, env = "FINSIGHT_SAMPLE_URL", default_value = DEFAULT_SAMPLE_URL)]
    pub sample_url: String,

    /// Initial business type (Retail, Manufacturing, Agri, Services, Logistics, Ecommerce, Other)
    #[arg(long, default_value = "Retail", value_parser = parse_business_type)]
    pub business_type: BusinessType,

    /// Initial display and insight language (English, Hindi)
    #[arg(long, default_value = "English", value_parser = parse_language)]
    pub language: Language,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone())
    }
}

fn parse_business_type(value: &str) -> Result<BusinessType, String> {
    value.parse()
}

fn parse_language(value: &str) -> Result<Language, String> {
    value.parse()
}
