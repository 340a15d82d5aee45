pub mod analysis;
pub mod client;
pub mod error;
pub mod format;
pub mod i18n;
pub mod report;
pub mod request;
pub mod summary;
pub mod theme;
pub mod traits;

// Export the analyzer seam
pub use traits::StatementAnalyzer;

// Export backend client and response model
pub use client::{AnalysisClient, ClientConfig, interpret_response, DEFAULT_API_BASE, DEFAULT_SAMPLE_URL};
pub use analysis::{AnalysisReport, Metrics, MonthlyPoint};
pub use error::{UploadError, LOCAL_BACKEND_ADDR};

// Export request parameters and translations
pub use request::{BusinessType, SelectedFile, UploadRequest};
pub use i18n::{Language, Translations};

// Export dashboard text helpers
pub use summary::{DashboardSummary, Tone};
pub use report::render_report;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha, DEFAULT_THEME};
