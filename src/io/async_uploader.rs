//! Background statement upload.
//!
//! The analysis call blocks until the backend has parsed the statement and
//! generated insights, so it runs on a worker thread while the GUI keeps
//! drawing the analyzing view.

use eframe::egui;
use finsight::{AnalysisReport, StatementAnalyzer, UploadError, UploadRequest};
use log::{error, info};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Result of a completed upload.
pub enum UploadResult {
    /// The backend returned a report
    Success {
        report: AnalysisReport,
        /// Name of the file that was analyzed
        file_name: String,
    },
    /// The upload, the HTTP call or the decoding failed
    Error(UploadError),
    /// No upload finished since the last check
    None,
}

/// Wakes the UI when the worker exits, normally or by panic.
struct RepaintOnExit(egui::Context);

impl Drop for RepaintOnExit {
    fn drop(&mut self) {
        self.0.request_repaint();
    }
}

/// Runs one analysis request at a time on a worker thread.
pub struct AsyncUploader {
    analyzer: Arc<dyn StatementAnalyzer>,

    /// Channel receiver for the pending result; `Some` while an upload is in flight
    receiver: Option<Receiver<Result<AnalysisReport, UploadError>>>,

    /// File name of the pending upload
    pending_file_name: Option<String>,
}

impl AsyncUploader {
    pub fn new(analyzer: Arc<dyn StatementAnalyzer>) -> Self {
        Self {
            analyzer,
            receiver: None,
            pending_file_name: None,
        }
    }

    /// Checks if an upload is currently waiting for the backend.
    pub fn is_uploading(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts the analysis of `request` on a worker thread.
    ///
    /// Returns false without doing anything if another upload is still pending.
    /// Call `check_completion()` once per frame to collect the result.
    pub fn start_upload(&mut self, request: UploadRequest, ctx: &egui::Context) -> bool {
        if self.is_uploading() {
            return false;
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.pending_file_name = Some(request.file.file_name.clone());

        let analyzer = Arc::clone(&self.analyzer);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            // Declared before the sender so the repaint follows the disconnect on unwind
            let _repaint = RepaintOnExit(ctx_handle);
            let sender = sender;

            let result = analyzer.analyze(&request);
            match &result {
                Ok(_) => info!("Analysis of {} completed", request.file.file_name),
                Err(e) => error!("Analysis of {} failed: {}", request.file.file_name, e),
            }

            let _ = sender.send(result);
        });

        true
    }

    /// Returns the finished result, if the worker has delivered one.
    ///
    /// A worker that dropped its sender without answering (it panicked)
    /// is reported as `UploadError::WorkerStopped`.
    pub fn check_completion(&mut self) -> UploadResult {
        let Some(receiver) = &self.receiver else {
            return UploadResult::None;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return UploadResult::None,
            Err(TryRecvError::Disconnected) => {
                error!("Upload worker stopped without a result");
                Err(UploadError::WorkerStopped)
            }
        };

        self.receiver = None;
        let file_name = self.pending_file_name.take().unwrap_or_default();

        match result {
            Ok(report) => UploadResult::Success { report, file_name },
            Err(e) => UploadResult::Error(e),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use finsight::{BusinessType, Language, Metrics, SelectedFile};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    /// Analyzer that answers from memory and counts its calls.
    pub(crate) struct StubAnalyzer {
        pub calls: AtomicUsize,
        pub outcome: fn() -> Result<AnalysisReport, UploadError>,
    }

    impl StubAnalyzer {
        pub(crate) fn new(outcome: fn() -> Result<AnalysisReport, UploadError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome,
            })
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl StatementAnalyzer for StubAnalyzer {
        fn analyze(&self, _request: &UploadRequest) -> Result<AnalysisReport, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)()
        }
    }

    pub(crate) fn sample_report() -> Result<AnalysisReport, UploadError> {
        Ok(AnalysisReport {
            metrics: Metrics {
                score: 82.0,
                readiness: "High".to_string(),
                total_revenue: 250000.0,
                total_expenses: 180000.0,
                net_cash_flow: 70000.0,
                debt_obligations: Some(12000.0),
                tax_compliance: "Tax Payments Detected".to_string(),
                risks: vec![],
                monthly_trend: vec![],
                business_type: Some("Retail".to_string()),
            },
            insights: "Healthy.".to_string(),
        })
    }

    pub(crate) fn server_error() -> Result<AnalysisReport, UploadError> {
        Err(UploadError::Server {
            status: 400,
            detail: "Unsupported file format".to_string(),
        })
    }

    pub(crate) fn crashing_analyzer() -> Result<AnalysisReport, UploadError> {
        panic!("analyzer crashed")
    }

    pub(crate) fn wait_for_result(uploader: &mut AsyncUploader) -> UploadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            match uploader.check_completion() {
                UploadResult::None if Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(5));
                }
                other => return other,
            }
        }
    }

    fn request() -> UploadRequest {
        UploadRequest {
            file: SelectedFile::new("statement.csv"),
            business_type: BusinessType::Retail,
            language: Language::English,
        }
    }

    #[test]
    fn test_uploader_idle_on_creation() {
        let mut uploader = AsyncUploader::new(StubAnalyzer::new(sample_report));
        assert!(!uploader.is_uploading());
        assert!(matches!(uploader.check_completion(), UploadResult::None));
    }

    #[test]
    fn test_upload_delivers_report() {
        let analyzer = StubAnalyzer::new(sample_report);
        let mut uploader = AsyncUploader::new(analyzer.clone());
        let ctx = egui::Context::default();

        assert!(uploader.start_upload(request(), &ctx));
        match wait_for_result(&mut uploader) {
            UploadResult::Success { report, file_name } => {
                assert_eq!(report.metrics.score, 82.0);
                assert_eq!(file_name, "statement.csv");
            }
            _ => panic!("expected a report"),
        }
        assert_eq!(analyzer.call_count(), 1);
        assert!(!uploader.is_uploading());
    }

    #[test]
    fn test_upload_delivers_error() {
        let mut uploader = AsyncUploader::new(StubAnalyzer::new(server_error));
        let ctx = egui::Context::default();

        uploader.start_upload(request(), &ctx);
        match wait_for_result(&mut uploader) {
            UploadResult::Error(e) => assert!(e.to_string().contains("Unsupported file format")),
            _ => panic!("expected an error"),
        }
    }

    #[test]
    fn test_crashed_worker_reports_error_and_frees_uploader() {
        let analyzer = StubAnalyzer::new(crashing_analyzer);
        let mut uploader = AsyncUploader::new(analyzer.clone());
        let ctx = egui::Context::default();

        assert!(uploader.start_upload(request(), &ctx));
        match wait_for_result(&mut uploader) {
            UploadResult::Error(UploadError::WorkerStopped) => {}
            UploadResult::Error(e) => panic!("unexpected error: {}", e),
            UploadResult::Success { .. } => panic!("expected an error"),
            UploadResult::None => panic!("upload never finished"),
        }
        assert!(!uploader.is_uploading());

        // A later submission is accepted again
        assert!(uploader.start_upload(request(), &ctx));
        let _ = wait_for_result(&mut uploader);
        assert_eq!(analyzer.call_count(), 2);
    }
}
