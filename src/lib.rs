//! # Deskreport - attendance report export
//!
//! A command-line utility and library that converts a customer-service
//! analytics snapshot into two standardized artifacts: a paginated PDF
//! document and a three-sheet Excel workbook.
//!
//! ## Features
//!
//! - **Report Model**: Typed attendance, agent, channel, hourly and KPI data
//! - **Shared Formatting**: One formatter feeds both outputs so they never diverge
//! - **PDF Export**: Grid tables over two sections with reproducible bytes
//! - **Excel Export**: "Metrics", "Agents" and "Volume by Hour" sheets with native numbers
//! - **Export Controller**: At most one in-flight export per kind, typed outcomes
//! - **Data Sources**: JSON file, HTTP endpoint or built-in demo data
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deskreport::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
