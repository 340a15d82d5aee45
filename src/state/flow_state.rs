//! Upload flow state management.
//!
//! This module encapsulates the three mutually exclusive views of the client
//! and the data each of them needs: the selected statement, the last report
//! and the last error.

use finsight::{AnalysisReport, SelectedFile};

/// Current view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Upload,
    Analyzing,
    Dashboard,
}

/// State of the upload → analyzing → dashboard flow.
///
/// Responsibilities:
/// - Tracking the current step
/// - Holding the selected attachment
/// - Holding the last successful report and the last user-visible error
///
/// Nothing here is persisted; every run starts at `Step::Upload`.
#[derive(Debug, Clone, Default)]
pub struct FlowState {
    step: Step,
    file: Option<SelectedFile>,
    report: Option<AnalysisReport>,
    error: Option<String>,
}

impl FlowState {
    /// Creates a new flow state on the upload step with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ===== Transitions =====

    /// Replaces the selected attachment.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    /// Enters the analyzing step and clears the previous error.
    pub fn begin_analysis(&mut self) {
        self.step = Step::Analyzing;
        self.error = None;
    }

    /// Stores a successful report and shows the dashboard.
    pub fn complete(&mut self, report: AnalysisReport) {
        self.report = Some(report);
        self.error = None;
        self.step = Step::Dashboard;
    }

    /// Returns to the upload step with a user-visible error.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.step = Step::Upload;
    }

    /// Leaves the dashboard for another upload; the selected file is kept.
    pub fn return_to_upload(&mut self) {
        self.step = Step::Upload;
        self.error = None;
    }
}
