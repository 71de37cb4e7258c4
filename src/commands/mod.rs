//! Command-line interface.
//!
//! - `export`: writes the report as PDF, XLSX or both
//! - `show`: prints the report to the console
//! - `init`: interactive configuration

pub mod export;
pub mod init;
pub mod show;
pub mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Export the attendance report as a PDF document or Excel workbook")]
    Export(export::ExportArgs),
    #[command(about = "Print the attendance report to the console")]
    Show(show::ShowArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Export(args) => export::cmd(args).await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Init => init::cmd(),
        }
    }
}
