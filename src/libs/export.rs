//! Export orchestration: format, build, save, notify.
//!
//! [`ExportController`] takes a report snapshot and an [`ExportKind`], runs the
//! shared formatter, hands the rows to the matching builder, saves the bytes
//! through an [`ArtifactSink`] and finally tells an [`ExportObserver`] how it
//! went.
//!
//! ## State Machine
//!
//! Each kind moves through `Idle → Exporting → {Succeeded, Failed}`. A second
//! request for a kind that is still `Exporting` is rejected immediately; the
//! other kind may run at the same time. Finished kinds accept new requests.
//! An admitted export runs on its own task, so it always reaches a final state.
//!
//! ## Ordering
//!
//! 1. Model warnings are logged (they never abort the export)
//! 2. Rows are formatted; a formatting error ends the export before any builder runs
//! 3. The builder and the save run on the blocking thread pool
//! 4. The observer is notified after the save, or after the failure
//!
//! Errors never escape [`ExportController::export`]; they become an
//! [`ExportOutcome`]. Nothing is retried.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deskreport::libs::export::{ConsoleObserver, DirectorySink, ExportController, ExportKind};
//! use deskreport::libs::source::DemoSource;
//! use std::sync::Arc;
//!
//! # async fn run() {
//! let controller = ExportController::new(
//!     Arc::new(DirectorySink::new(".")),
//!     Arc::new(ConsoleObserver),
//!     "Last 30 days",
//! );
//! let outcome = controller.export(&DemoSource::model(), ExportKind::Document, None).await;
//! assert!(outcome.is_success());
//! # }
//! ```

use super::document::DocumentBuilder;
use super::error::{ReportError, ReportResult};
use super::formatter;
use super::messages::Message;
use super::model::ReportModel;
use super::spreadsheet::SpreadsheetBuilder;
use crate::{msg_error, msg_success};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Base file name used when the caller gives no hint.
pub const DEFAULT_FILE_NAME_HINT: &str = "attendance-report";

/// Artifact produced by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// Paginated PDF report.
    Document,
    /// Three-sheet Excel workbook.
    Spreadsheet,
}

impl ExportKind {
    pub const ALL: [ExportKind; 2] = [ExportKind::Document, ExportKind::Spreadsheet];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Document => "pdf",
            ExportKind::Spreadsheet => "xlsx",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportKind::Document => write!(f, "document"),
            ExportKind::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    Exporting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Success,
    Failure,
}

/// Notification handed to the observer once an export finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEvent {
    pub status: ExportStatus,
    pub kind: ExportKind,
    pub message: String,
}

/// Where a finished artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub kind: ExportKind,
    pub file_name: String,
    pub location: PathBuf,
    pub size: usize,
}

#[derive(Debug)]
pub enum ExportOutcome {
    Succeeded(SavedArtifact),
    Failed { kind: ExportKind, error: ReportError },
    /// Another export of this kind was in flight; nothing was done.
    Rejected { kind: ExportKind },
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Succeeded(_))
    }

    pub fn kind(&self) -> ExportKind {
        match self {
            ExportOutcome::Succeeded(artifact) => artifact.kind,
            ExportOutcome::Failed { kind, .. } | ExportOutcome::Rejected { kind } => *kind,
        }
    }
}

/// Receives the finished artifact bytes. Stands in for a browser download.
pub trait ArtifactSink: Send + Sync {
    fn save(&self, file_name: &str, bytes: &[u8]) -> ReportResult<PathBuf>;
}

/// Writes artifacts into a directory, creating it when needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> ReportResult<PathBuf> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Told about every finished export, successful or not.
pub trait ExportObserver: Send + Sync {
    fn notify(&self, event: &ExportEvent);
}

/// Prints export results through the message macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl ExportObserver for ConsoleObserver {
    fn notify(&self, event: &ExportEvent) {
        match event.status {
            ExportStatus::Success => msg_success!(event.message),
            ExportStatus::Failure => msg_error!(event.message),
        }
    }
}

/// Derives `<hint>.<ext>`, falling back to [`DEFAULT_FILE_NAME_HINT`].
///
/// A hint that already carries the kind's extension is not extended twice.
pub fn file_name_for(hint: Option<&str>, kind: ExportKind) -> String {
    let hint = hint.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_FILE_NAME_HINT);
    let suffix = format!(".{}", kind.extension());
    let cut = hint.len().saturating_sub(suffix.len());
    let base = if hint.len() > suffix.len() && hint.is_char_boundary(cut) && hint[cut..].eq_ignore_ascii_case(&suffix) {
        &hint[..cut]
    } else {
        hint
    };
    let base = if base.is_empty() { DEFAULT_FILE_NAME_HINT } else { base };
    format!("{}{}", base, suffix)
}

type StateTable = Arc<Mutex<HashMap<ExportKind, ExportState>>>;

/// Holds a kind in `Exporting` until finished; an unwinding task leaves it `Failed`.
struct ExportSlot {
    states: StateTable,
    kind: ExportKind,
    finished: bool,
}

impl ExportSlot {
    fn finish(mut self, state: ExportState) {
        self.states.lock().insert(self.kind, state);
        self.finished = true;
    }
}

impl Drop for ExportSlot {
    fn drop(&mut self) {
        if !self.finished {
            self.states.lock().insert(self.kind, ExportState::Failed);
        }
    }
}

pub struct ExportController {
    states: StateTable,
    sink: Arc<dyn ArtifactSink>,
    observer: Arc<dyn ExportObserver>,
    period_label: String,
}

impl ExportController {
    pub fn new(sink: Arc<dyn ArtifactSink>, observer: Arc<dyn ExportObserver>, period_label: impl Into<String>) -> Self {
        Self {
            states: Arc::new(Mutex::new(HashMap::new())),
            sink,
            observer,
            period_label: period_label.into(),
        }
    }

    pub fn state(&self, kind: ExportKind) -> ExportState {
        self.states.lock().get(&kind).copied().unwrap_or(ExportState::Idle)
    }

    pub fn period_label(&self) -> &str {
        &self.period_label
    }

    /// Exports `model` as `kind`, stamped with the current time.
    pub async fn export(&self, model: &ReportModel, kind: ExportKind, file_name_hint: Option<&str>) -> ExportOutcome {
        self.export_at(model, kind, file_name_hint, Utc::now()).await
    }

    /// Runs both kinds concurrently.
    pub async fn export_all(&self, model: &ReportModel, file_name_hint: Option<&str>) -> Vec<ExportOutcome> {
        let generated_at = Utc::now();
        let (document, spreadsheet) = tokio::join!(
            self.export_at(model, ExportKind::Document, file_name_hint, generated_at),
            self.export_at(model, ExportKind::Spreadsheet, file_name_hint, generated_at),
        );
        vec![document, spreadsheet]
    }

    /// Exports with an explicit generation timestamp.
    ///
    /// An admitted export runs on its own task. Dropping this future does not
    /// cancel it: the kind stays `Exporting` until the artifact is saved or the
    /// export fails, and the observer is notified either way.
    pub async fn export_at(
        &self,
        model: &ReportModel,
        kind: ExportKind,
        file_name_hint: Option<&str>,
        generated_at: DateTime<Utc>,
    ) -> ExportOutcome {
        let slot = match self.begin(kind) {
            Ok(slot) => slot,
            Err(err) => {
                tracing::warn!(%kind, "{}", err);
                return ExportOutcome::Rejected { kind };
            }
        };

        let job = ExportJob {
            kind,
            file_name: file_name_for(file_name_hint, kind),
            generated_at,
            period_label: self.period_label.clone(),
            sink: Arc::clone(&self.sink),
            observer: Arc::clone(&self.observer),
        };
        tracing::debug!(%kind, file_name = %job.file_name, "export started");

        match tokio::spawn(job.run(model.clone(), slot)).await {
            Ok(outcome) => outcome,
            Err(e) => ExportOutcome::Failed {
                kind,
                error: ReportError::Build(format!("export task did not complete: {}", e)),
            },
        }
    }

    fn begin(&self, kind: ExportKind) -> ReportResult<ExportSlot> {
        let mut states = self.states.lock();
        let state = states.entry(kind).or_insert(ExportState::Idle);
        if *state == ExportState::Exporting {
            return Err(ReportError::ConcurrentExportRejected(kind));
        }
        *state = ExportState::Exporting;
        Ok(ExportSlot {
            states: Arc::clone(&self.states),
            kind,
            finished: false,
        })
    }
}

/// One admitted export, owned by its task.
struct ExportJob {
    kind: ExportKind,
    file_name: String,
    generated_at: DateTime<Utc>,
    period_label: String,
    sink: Arc<dyn ArtifactSink>,
    observer: Arc<dyn ExportObserver>,
}

impl ExportJob {
    async fn run(self, model: ReportModel, slot: ExportSlot) -> ExportOutcome {
        let kind = self.kind;
        match self.produce(model).await {
            Ok(artifact) => {
                slot.finish(ExportState::Succeeded);
                tracing::info!(%kind, location = %artifact.location.display(), size = artifact.size, "export finished");
                self.observer.notify(&ExportEvent {
                    status: ExportStatus::Success,
                    kind,
                    message: Message::ExportCompleted(artifact.location.display().to_string()).to_string(),
                });
                ExportOutcome::Succeeded(artifact)
            }
            Err(error) => {
                slot.finish(ExportState::Failed);
                tracing::error!(%kind, "export failed: {}", error);
                self.observer.notify(&ExportEvent {
                    status: ExportStatus::Failure,
                    kind,
                    message: Message::ExportFailed(kind.to_string(), error.to_string()).to_string(),
                });
                ExportOutcome::Failed { kind, error }
            }
        }
    }

    async fn produce(&self, model: ReportModel) -> ReportResult<SavedArtifact> {
        let kind = self.kind;
        for warning in model.validate() {
            tracing::warn!(%kind, "report model inconsistency: {}", warning);
        }

        let rows = formatter::format(&model)?;
        let sink = Arc::clone(&self.sink);
        let period_label = self.period_label.clone();
        let file_name = self.file_name.clone();
        let generated_at = self.generated_at;

        tokio::task::spawn_blocking(move || -> ReportResult<SavedArtifact> {
            let bytes = match kind {
                ExportKind::Document => DocumentBuilder::new().build(&rows, generated_at, &period_label)?,
                ExportKind::Spreadsheet => SpreadsheetBuilder::new().build(&rows)?,
            };
            let location = sink.save(&file_name, &bytes)?;
            Ok(SavedArtifact {
                kind,
                file_name,
                location,
                size: bytes.len(),
            })
        })
        .await
        .map_err(|e| ReportError::Build(format!("export task did not complete: {}", e)))?
    }
}
