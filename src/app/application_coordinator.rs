//! Application-level coordination and workflow management.
//!
//! Handles the upload workflow: file selection, submission, completion
//! handling, language switching and report export.

use crate::app::AppState;
use crate::io::{AsyncUploader, UploadResult};
use crate::state::Step;
use anyhow::Context;
use finsight::{render_report, SelectedFile, UploadRequest};
use log::info;
use std::path::{Path, PathBuf};

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Records the statement chosen in the picker or dropped on the window.
    pub fn select_file(state: &mut AppState, path: PathBuf) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            state.last_directory = Some(parent.to_path_buf());
        }
        state.flow.select_file(SelectedFile::new(path));
    }

    /// Submits the selected statement for analysis.
    ///
    /// Without a selected file nothing happens and no request is made.
    /// Returns true if an upload was started.
    pub fn submit(state: &mut AppState, uploader: &mut AsyncUploader, ctx: &egui::Context) -> bool {
        let Some(file) = state.flow.file().cloned() else {
            return false;
        };
        if state.flow.step() == Step::Analyzing {
            return false;
        }

        let request = UploadRequest {
            file,
            business_type: state.form.business_type(),
            language: state.form.language(),
        };

        if !uploader.start_upload(request, ctx) {
            return false;
        }

        state.notice = None;
        state.flow.begin_analysis();
        true
    }

    /// Checks for upload completion and applies the result to the flow.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if an upload finished (success or error).
    pub fn check_upload_completion(state: &mut AppState, uploader: &mut AsyncUploader) -> bool {
        match uploader.check_completion() {
            UploadResult::Success { report, file_name } => {
                info!("Showing dashboard for {}", file_name);
                state.flow.complete(report);
                true
            }
            UploadResult::Error(e) => {
                state.flow.fail(e.user_message());
                true
            }
            UploadResult::None => false,
        }
    }

    pub fn toggle_language(state: &mut AppState) {
        state.form.toggle_language();
    }

    /// Leaves the dashboard so another statement can be analyzed.
    pub fn new_analysis(state: &mut AppState) {
        state.flow.return_to_upload();
    }

    /// Writes the current dashboard as a text report and reports the outcome in the status bar.
    pub fn export_report(state: &mut AppState, path: PathBuf) {
        match Self::write_report(state, &path) {
            Ok(()) => {
                info!("Report written to {}", path.display());
                state.notice = Some(format!("Report saved to {}", path.display()));
            }
            Err(e) => {
                log::error!("Report export failed: {:#}", e);
                state.notice = Some(format!("Could not save report: {:#}", e));
            }
        }
    }

    fn write_report(state: &AppState, path: &Path) -> anyhow::Result<()> {
        let report = state
            .flow
            .report()
            .context("no analysis to export")?;
        let text = render_report(report, state.form.translations());
        std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::async_uploader::tests::{
        crashing_analyzer, sample_report, server_error, wait_for_result, StubAnalyzer,
    };
    use finsight::{DashboardSummary, LOCAL_BACKEND_ADDR};

    fn finish(state: &mut AppState, uploader: &mut AsyncUploader) {
        let result = wait_for_result(uploader);
        match result {
            UploadResult::Success { report, .. } => state.flow.complete(report),
            UploadResult::Error(e) => state.flow.fail(e.user_message()),
            UploadResult::None => panic!("upload did not finish"),
        }
    }

    #[test]
    fn test_submit_without_file_makes_no_request() {
        let analyzer = StubAnalyzer::new(sample_report);
        let mut uploader = AsyncUploader::new(analyzer.clone());
        let mut state = AppState::for_tests();
        let ctx = egui::Context::default();

        assert!(!ApplicationCoordinator::submit(&mut state, &mut uploader, &ctx));
        assert_eq!(state.flow.step(), Step::Upload);
        assert!(!uploader.is_uploading());
        assert_eq!(analyzer.call_count(), 0);
    }

    #[test]
    fn test_successful_upload_shows_dashboard() {
        let analyzer = StubAnalyzer::new(sample_report);
        let mut uploader = AsyncUploader::new(analyzer.clone());
        let mut state = AppState::for_tests();
        let ctx = egui::Context::default();

        ApplicationCoordinator::select_file(&mut state, PathBuf::from("/tmp/statement.csv"));
        assert!(ApplicationCoordinator::submit(&mut state, &mut uploader, &ctx));
        assert_eq!(state.flow.step(), Step::Analyzing);

        finish(&mut state, &mut uploader);
        assert_eq!(state.flow.step(), Step::Dashboard);
        assert_eq!(analyzer.call_count(), 1);

        let report = state.flow.report().unwrap();
        let summary = DashboardSummary::new(report, state.form.translations());
        assert_eq!(summary.score_text, "82/100");
        assert_eq!(summary.revenue_text, "Revenue: 250,000");
        assert_eq!(summary.expenses_text, "Expenses: 180,000");
    }

    #[test]
    fn test_failed_upload_returns_to_upload_with_error() {
        let mut uploader = AsyncUploader::new(StubAnalyzer::new(server_error));
        let mut state = AppState::for_tests();
        let ctx = egui::Context::default();

        ApplicationCoordinator::select_file(&mut state, PathBuf::from("notes.pdf"));
        ApplicationCoordinator::submit(&mut state, &mut uploader, &ctx);
        finish(&mut state, &mut uploader);

        assert_eq!(state.flow.step(), Step::Upload);
        let error = state.flow.error().unwrap();
        assert!(error.contains("Unsupported file format"));
        assert!(error.contains(LOCAL_BACKEND_ADDR));
    }

    #[test]
    fn test_check_completion_applies_result() {
        let mut uploader = AsyncUploader::new(StubAnalyzer::new(sample_report));
        let mut state = AppState::for_tests();
        let ctx = egui::Context::default();

        ApplicationCoordinator::select_file(&mut state, PathBuf::from("statement.csv"));
        ApplicationCoordinator::submit(&mut state, &mut uploader, &ctx);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while !ApplicationCoordinator::check_upload_completion(&mut state, &mut uploader) {
            assert!(std::time::Instant::now() < deadline, "upload did not finish");
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(state.flow.step(), Step::Dashboard);
    }

    #[test]
    fn test_crashed_analysis_returns_to_upload_and_allows_retry() {
        let analyzer = StubAnalyzer::new(crashing_analyzer);
        let mut uploader = AsyncUploader::new(analyzer.clone());
        let mut state = AppState::for_tests();
        let ctx = egui::Context::default();

        ApplicationCoordinator::select_file(&mut state, PathBuf::from("statement.csv"));
        assert!(ApplicationCoordinator::submit(&mut state, &mut uploader, &ctx));

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while !ApplicationCoordinator::check_upload_completion(&mut state, &mut uploader) {
            assert!(std::time::Instant::now() < deadline, "upload did not finish");
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(state.flow.step(), Step::Upload);
        assert!(state.flow.error().unwrap().contains(LOCAL_BACKEND_ADDR));

        assert!(ApplicationCoordinator::submit(&mut state, &mut uploader, &ctx));
        assert_eq!(state.flow.step(), Step::Analyzing);
        let _ = wait_for_result(&mut uploader);
        assert_eq!(analyzer.call_count(), 2);
    }

    #[test]
    fn test_select_file_remembers_directory() {
        let mut state = AppState::for_tests();
        ApplicationCoordinator::select_file(&mut state, PathBuf::from("/data/books/jan.xlsx"));
        assert_eq!(state.last_directory, Some(PathBuf::from("/data/books")));
        assert_eq!(state.flow.file().unwrap().file_name, "jan.xlsx");
    }

    #[test]
    fn test_new_analysis_keeps_file() {
        let mut state = AppState::for_tests();
        ApplicationCoordinator::select_file(&mut state, PathBuf::from("jan.csv"));
        if let Ok(report) = sample_report() {
            state.flow.complete(report);
        }
        ApplicationCoordinator::new_analysis(&mut state);
        assert_eq!(state.flow.step(), Step::Upload);
        assert!(state.flow.file().is_some());
    }

    #[test]
    fn test_export_report_writes_file() {
        let mut state = AppState::for_tests();
        if let Ok(report) = sample_report() {
            state.flow.complete(report);
        }
        let path = std::env::temp_dir().join("finsight_export_test.txt");
        let _ = std::fs::remove_file(&path);

        ApplicationCoordinator::export_report(&mut state, path.clone());

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("82/100"));
        assert!(state.notice.as_deref().unwrap().starts_with("Report saved"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_export_without_report_sets_notice() {
        let mut state = AppState::for_tests();
        ApplicationCoordinator::export_report(&mut state, std::env::temp_dir().join("unused.txt"));
        assert!(state.notice.as_deref().unwrap().contains("no analysis to export"));
    }
}
