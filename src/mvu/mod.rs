// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Model-View-Update kernel for the guided assistant.
//!
//! The model wraps the wizard [`Session`]; messages mutate it through the
//! state machine, and commands carry the side effects (report export,
//! opening the exported file). Commands run synchronously in the frame
//! loop: both apps are single-threaded by design.

use std::path::PathBuf;

use crate::logic::report::write_report;
use crate::models::profile::{Gender, Profile};
use crate::models::session::{Question, Session};

/// Top-level assistant state.
#[derive(Default)]
pub struct AppModel {
    /// Wizard answers and current step.
    pub session: Session,
    /// Latest status message to display in the bottom panel.
    pub status: Option<String>,
    /// Latest validation/export error to display in a modal.
    pub error: Option<String>,
    /// Path of the most recent successful export.
    pub last_report: Option<PathBuf>,
}

/// Application messages routed through the update function.
pub enum Msg {
    AnswerChanged(Question, String),
    GenderPicked(Gender),
    NextPressed,
    BackPressed,
    ExportRequested(PathBuf),
    ExportCompleted(Result<PathBuf, String>),
    OpenReportRequested(PathBuf),
    ReportOpened(Result<PathBuf, String>),
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    ExportReport { output: PathBuf, profile: Profile },
    OpenReport(PathBuf),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::AnswerChanged(question, value) => model.session.set_answer(question, value),
        Msg::GenderPicked(gender) => model.session.gender = Some(gender),
        Msg::NextPressed => {
            if let Err(err) = model.session.advance() {
                surface_event(model, err.to_string(), true);
            }
        }
        Msg::BackPressed => model.session.back(),
        Msg::ExportRequested(output) => match model.session.profile() {
            Ok(profile) => cmds.push(Command::ExportReport { output, profile }),
            Err(err) => surface_event(model, err.to_string(), true),
        },
        Msg::ExportCompleted(result) => match result {
            Ok(path) => {
                model.last_report = Some(path.clone());
                surface_event(model, format!("Report saved: {}", path.display()), false);
            }
            Err(err) => surface_event(model, format!("Failed to export report:\n\n{err}"), true),
        },
        Msg::OpenReportRequested(path) => cmds.push(Command::OpenReport(path)),
        Msg::ReportOpened(result) => match result {
            Ok(path) => surface_event(model, format!("Opened {}", path.display()), false),
            Err(err) => surface_event(model, format!("Failed to open report:\n\n{err}"), true),
        },
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::ExportReport { output, profile } => {
            let result = write_report(&output, &profile)
                .map(|_| output)
                .map_err(|err| err.to_string());
            Msg::ExportCompleted(result)
        }
        Command::OpenReport(path) => {
            let result = open::that(&path)
                .map(|_| path)
                .map_err(|err| err.to_string());
            Msg::ReportOpened(result)
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
