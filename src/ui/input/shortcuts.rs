//! Keyboard shortcuts.
//!
//! - Ctrl/Cmd+O: pick a statement (upload step)
//! - Ctrl/Cmd+Enter: analyze the selected statement (upload step)
//! - Ctrl/Cmd+S: save the report (dashboard step)

use eframe::egui;
use egui::{Key, KeyboardShortcut, Modifiers};
use crate::app::AppState;
use crate::state::Step;
use crate::ui::dialogs;
use crate::ui::panel_manager::PanelInteraction;

const OPEN_FILE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const SUBMIT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Enter);
const SAVE_REPORT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

/// Consumes the shortcut valid for the current step, if pressed.
pub fn handle_shortcuts(ctx: &egui::Context, state: &AppState) -> Option<PanelInteraction> {
    let last_directory = state.last_directory.as_deref();

    match state.flow.step() {
        Step::Upload => {
            if ctx.input_mut(|i| i.consume_shortcut(&SUBMIT)) {
                return Some(PanelInteraction::SubmitRequested);
            }
            if ctx.input_mut(|i| i.consume_shortcut(&OPEN_FILE)) {
                return dialogs::pick_statement(last_directory).map(PanelInteraction::FileChosen);
            }
            None
        }
        Step::Dashboard => {
            if ctx.input_mut(|i| i.consume_shortcut(&SAVE_REPORT)) {
                return dialogs::pick_report_destination(last_directory)
                    .map(PanelInteraction::ExportReportRequested);
            }
            None
        }
        Step::Analyzing => None,
    }
}
