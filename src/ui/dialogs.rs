//! Native file dialogs shared by buttons and keyboard shortcuts.

use finsight::report::DEFAULT_REPORT_NAME;
use std::path::{Path, PathBuf};

/// Extensions the backend can parse.
pub const STATEMENT_EXTENSIONS: &[&str] = &["csv", "xlsx"];

/// Asks the user for a statement to analyze.
pub fn pick_statement(last_directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Financial Statements", STATEMENT_EXTENSIONS)
        .add_filter("CSV", &["csv"])
        .add_filter("Excel Workbook", &["xlsx"]);

    if let Some(dir) = last_directory.map(Path::to_path_buf).or_else(|| std::env::current_dir().ok()) {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

/// Asks the user where to save the text report.
pub fn pick_report_destination(last_directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Text Report", &["txt"])
        .set_file_name(DEFAULT_REPORT_NAME);

    if let Some(dir) = dirs::download_dir().or_else(|| last_directory.map(Path::to_path_buf)) {
        dialog = dialog.set_directory(dir);
    }

    dialog.save_file()
}
