//! Core library modules for deskreport.
//!
//! ## Pipeline
//!
//! - [`source`] and [`session`]: obtain and hold a [`model::ReportModel`] snapshot
//! - [`formatter`]: turns the model into display rows shared by both outputs
//! - [`document`] and [`spreadsheet`]: build PDF and XLSX bytes from the rows
//! - [`export`]: runs an export per kind, saves the artifact and notifies
//!
//! ## Support
//!
//! - [`config`], [`data_storage`]: persisted settings
//! - [`error`]: the [`error::ReportError`] taxonomy
//! - [`messages`], [`view`]: console output
//! - [`sentiment`]: tone labels for sentiment scores
//!
//! ```rust,no_run
//! use deskreport::libs::{formatter, source::DemoSource, spreadsheet::SpreadsheetBuilder};
//!
//! let rows = formatter::format(&DemoSource::model())?;
//! let bytes = SpreadsheetBuilder::new().build(&rows)?;
//! std::fs::write("attendance-report.xlsx", bytes)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod document;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod model;
pub mod sentiment;
pub mod session;
pub mod source;
pub mod spreadsheet;
pub mod view;
