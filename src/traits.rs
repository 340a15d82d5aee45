use crate::analysis::AnalysisReport;
use crate::error::Result;
use crate::request::UploadRequest;

/// Trait for services that turn an uploaded statement into an analysis report.
///
/// The UI only talks to this trait, so the background uploader can run against
/// the HTTP client in production and against an in-memory stub in tests.
pub trait StatementAnalyzer: Send + Sync {
    /// Submits one statement and waits for the full analysis.
    ///
    /// Called from a worker thread; implementations may block.
    fn analyze(&self, request: &UploadRequest) -> Result<AnalysisReport>;
}
