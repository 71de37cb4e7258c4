//! Prints the current report snapshot as console tables.

use super::source::{period_label, SourceArgs};
use crate::{
    libs::{config::Config, error::ReportError, formatter, messages::Message, view::View},
    msg_debug, msg_error, msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// First day of a custom period (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Last day of a custom period (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let config = Config::read()?;
    let period = period_label(args.from.as_deref(), args.to.as_deref(), &config.export_settings().period_label)?;

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

    let rows = formatter::format(&model)?;
    View::report(&model, &rows, &period)?;
    View::warnings(&model.validate());

    Ok(())
}
