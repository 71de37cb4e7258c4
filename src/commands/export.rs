//! Report export command.
//!
//! Loads a fresh report snapshot and writes it as a PDF document, an Excel
//! workbook, or both at once. Each finished export is announced on the
//! console; a failed one leaves no file behind.
//!
//! ```bash
//! deskreport export document --demo
//! deskreport export all --input report.json --output-dir out --name march
//! deskreport export spreadsheet --url https://example.com/report --from 2024-03-01 --to 2024-03-31
//! ```

use super::source::{period_label, SourceArgs};
use crate::{
    libs::{
        config::Config,
        error::ReportError,
        export::{ConsoleObserver, DirectorySink, ExportController, ExportKind, ExportOutcome},
        messages::Message,
        model::ReportModel,
    },
    msg_debug, msg_error, msg_info, msg_warning,
};
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// PDF document
    Document,
    /// Excel workbook
    Spreadsheet,
    /// Both formats, concurrently
    All,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to produce
    #[arg(value_enum, default_value = "document")]
    target: ExportTarget,

    #[command(flatten)]
    source: SourceArgs,

    /// Directory the files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Base file name, without extension
    #[arg(short, long)]
    name: Option<String>,

    /// First day of a custom period (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Last day of a custom period (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let settings = config.export_settings();
    let period = period_label(args.from.as_deref(), args.to.as_deref(), &settings.period_label)?;

    let session = args.source.session(&config)?;
    msg_info!(Message::RefreshingData(session.describe_source()));
    let model = match session.refresh().await {
        Ok(model) => {
            msg_debug!(Message::DataRefreshed);
            model
        }
        Err(ReportError::DataUnavailable(reason)) => {
            msg_error!(Message::DataUnavailable(reason));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let output_dir = args.output_dir.unwrap_or(settings.output_dir);
    let hint = args.name.unwrap_or(settings.file_name_hint);
    let controller = ExportController::new(Arc::new(DirectorySink::new(output_dir)), Arc::new(ConsoleObserver), period);

    let outcomes = match args.target {
        ExportTarget::Document => vec![export_one(&controller, &model, ExportKind::Document, &hint).await],
        ExportTarget::Spreadsheet => vec![export_one(&controller, &model, ExportKind::Spreadsheet, &hint).await],
        ExportTarget::All => {
            for kind in ExportKind::ALL {
                msg_info!(Message::ExportStarted(kind.to_string()));
            }
            controller.export_all(&model, Some(&hint)).await
        }
    };

    for outcome in &outcomes {
        if let ExportOutcome::Rejected { kind } = outcome {
            msg_warning!(Message::ExportRejected(kind.to_string()));
        }
    }

    Ok(())
}

async fn export_one(
    controller: &ExportController,
    model: &ReportModel,
    kind: ExportKind,
    hint: &str,
) -> ExportOutcome {
    msg_info!(Message::ExportStarted(kind.to_string()));
    controller.export(model, kind, Some(hint)).await
}
