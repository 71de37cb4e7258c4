use super::formatter::{format_percent, format_real, FormattedRows, AGENT_HEADERS, METRIC_HEADERS};
use super::messages::Message;
use super::model::{Channel, ModelWarning, ReportModel, SentimentOverview};
use super::sentiment::Emotion;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use prettytable::{row, Table};

/// Console rendering of a report snapshot.
pub struct View {}

impl View {
    /// Prints every section of the report that the model carries.
    pub fn report(model: &ReportModel, rows: &FormattedRows, period_label: &str) -> Result<()> {
        msg_print!(Message::ReportHeader(period_label.to_string()), true);

        msg_print!(Message::SectionMetrics);
        Self::metrics(rows)?;

        msg_print!(Message::SectionStatus);
        Self::status(model)?;

        msg_print!(Message::SectionChannels);
        Self::channels(model)?;

        msg_print!(Message::SectionAgents);
        Self::agents(rows)?;

        if let Some(sentiment) = &model.sentiment {
            msg_print!(Message::SectionSentiment);
            Self::sentiment(sentiment)?;
        }

        Ok(())
    }

    pub fn metrics(rows: &FormattedRows) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![METRIC_HEADERS[0], METRIC_HEADERS[1]]);
        for metric in &rows.headline {
            table.add_row(row![metric.label, r->metric.value.text]);
        }
        table.printstd();

        Ok(())
    }

    pub fn status(model: &ReportModel) -> Result<()> {
        let attendance = model.attendance()?;
        let share = |count: u64| {
            if attendance.total == 0 {
                format_percent(0.0)
            } else {
                format_percent(count as f64 * 100.0 / attendance.total as f64)
            }
        };

        let mut table = Table::new();
        table.add_row(row!["STATUS", "COUNT", "SHARE"]);
        table.add_row(row!["Resolved", r->attendance.resolved, r->share(attendance.resolved)]);
        table.add_row(row!["Pending", r->attendance.pending, r->share(attendance.pending)]);
        table.add_row(row!["Total", r->attendance.total, r->""]);
        table.printstd();

        Ok(())
    }

    pub fn channels(model: &ReportModel) -> Result<()> {
        let sum = model.channel_sum();

        let mut table = Table::new();
        table.add_row(row!["CHANNEL", "COUNT", "SHARE"]);
        for channel in Channel::ALL {
            let count = model.channel_count(channel);
            let share = if sum == 0 { 0.0 } else { count as f64 * 100.0 / sum as f64 };
            table.add_row(row![channel.label(), r->count, r->format_percent(share)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn agents(rows: &FormattedRows) -> Result<()> {
        if rows.agents.is_empty() {
            msg_print!(Message::NoAgents);
            return Ok(());
        }

        let mut table = Table::new();
        table.add_row(row![AGENT_HEADERS[0], AGENT_HEADERS[1], AGENT_HEADERS[2], AGENT_HEADERS[3]]);
        for agent in &rows.agents {
            let [name, count, duration, satisfaction] = agent.texts();
            table.add_row(row![name, r->count, r->duration, r->satisfaction]);
        }
        table.printstd();

        Ok(())
    }

    pub fn sentiment(sentiment: &SentimentOverview) -> Result<()> {
        let tone: Emotion = sentiment.tone();
        let average = format!("{}/100", format_real(sentiment.average_score * 100.0));

        let mut table = Table::new();
        table.add_row(row!["ANALYZED", "POSITIVE", "NEUTRAL", "NEGATIVE", "AVERAGE", "TONE"]);
        table.add_row(row![
            r->sentiment.total_analyzed,
            r->format_percent(sentiment.positive),
            r->format_percent(sentiment.neutral),
            r->format_percent(sentiment.negative),
            r->average,
            format!("{} {}", tone.symbol(), tone)
        ]);
        table.printstd();

        if tone.needs_attention() {
            msg_warning!(Message::SentimentNeedsAttention(tone.to_string()));
        }

        Ok(())
    }

    pub fn warnings(warnings: &[ModelWarning]) {
        if warnings.is_empty() {
            return;
        }
        msg_warning!(Message::ModelWarningsHeader(warnings.len()));
        for warning in warnings {
            msg_print!(format!("  - {}", warning));
        }
    }
}
