//! Report data selection shared by `export` and `show`.
//!
//! Flags pick the source in this order: `--demo`, `--input`, `--url`, then
//! whatever `deskreport init` stored in the configuration. With nothing
//! configured the command stops with a hint.

use crate::{
    libs::{
        config::{Config, SourceConfig},
        messages::Message,
        session::ReportSession,
        source::{DemoSource, HttpSource, JsonFileSource, ReportSource},
    },
    msg_bail_anyhow,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args, Default)]
pub struct SourceArgs {
    /// Read the report model from a JSON file
    #[arg(short, long, conflicts_with_all = ["url", "demo"])]
    pub input: Option<PathBuf>,

    /// Fetch the report model from an HTTP endpoint
    #[arg(short, long, conflicts_with = "demo")]
    pub url: Option<String>,

    /// Use the built-in sample data
    #[arg(long)]
    pub demo: bool,
}

impl SourceArgs {
    /// Opens a session over the selected source.
    pub fn session(&self, config: &Config) -> Result<ReportSession> {
        let settings: SourceConfig = config.source_settings();

        let source: Arc<dyn ReportSource> = if self.demo {
            Arc::new(DemoSource)
        } else if let Some(path) = &self.input {
            Arc::new(JsonFileSource::new(path))
        } else if let Some(url) = &self.url {
            Arc::new(HttpSource::new(url.as_str(), settings.timeout())?)
        } else if let Some(url) = &settings.url {
            Arc::new(HttpSource::new(url.as_str(), settings.timeout())?)
        } else if let Some(path) = &settings.path {
            Arc::new(JsonFileSource::new(path))
        } else {
            msg_bail_anyhow!(Message::NoSourceConfigured);
        };

        Ok(ReportSession::new(source, settings.timeout()))
    }
}

/// Resolves the period shown in the document header.
///
/// Without dates the configured label is used. A custom range needs both
/// ends in `YYYY-MM-DD` form with `from <= to`.
pub fn period_label(from: Option<&str>, to: Option<&str>, default_label: &str) -> Result<String> {
    match (from, to) {
        (None, None) => Ok(default_label.to_string()),
        (Some(from), Some(to)) => {
            let start = NaiveDate::parse_from_str(from.trim(), "%Y-%m-%d")?;
            let end = NaiveDate::parse_from_str(to.trim(), "%Y-%m-%d")?;
            if start > end {
                msg_bail_anyhow!(Message::InvalidDateRange(start.to_string(), end.to_string()));
            }
            Ok(format!("Custom: {} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")))
        }
        _ => msg_bail_anyhow!(Message::IncompleteDateRange),
    }
}
