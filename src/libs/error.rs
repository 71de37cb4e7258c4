//! Error kinds for the report export pipeline.
//!
//! Library operations return [`ReportError`]. The export controller folds every
//! variant into a typed outcome so nothing escapes to the caller as an error;
//! CLI commands wrap the remaining paths in `anyhow`.

use super::export::ExportKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The data source could not supply a report model.
    #[error("Report data unavailable: {0}")]
    DataUnavailable(String),

    /// The model (or a set of formatted rows) is missing a required part.
    #[error("Formatting error: {0}")]
    Formatting(String),

    /// The document or workbook writer failed.
    #[error("Build error: {0}")]
    Build(String),

    /// Another export of the same kind is still in flight.
    #[error("Export already in progress: {0}")]
    ConcurrentExportRejected(ExportKind),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Build(err.to_string())
    }
}

impl From<printpdf::Error> for ReportError {
    fn from(err: printpdf::Error) -> Self {
        ReportError::Build(err.to_string())
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
