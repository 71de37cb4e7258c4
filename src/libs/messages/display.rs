//! Text for every [`Message`] variant.
//!
//! Messages with parameters interpolate them here, so call sites never build
//! user-facing strings by hand:
//!
//! ```rust
//! use deskreport::libs::messages::Message;
//!
//! let text = Message::ExportCompleted("out/attendance-report.pdf".into()).to_string();
//! assert_eq!(text, "Export completed successfully: out/attendance-report.pdf");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === EXPORT MESSAGES ===
            Message::ExportStarted(kind) => format!("Exporting {}...", kind),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportFailed(kind, reason) => format!("The {} export failed: {}", kind, reason),
            Message::ExportRejected(kind) => {
                format!("A {} export is already running. Wait for it to finish and try again.", kind)
            }

            // === DATA SOURCE MESSAGES ===
            Message::RefreshingData(source) => format!("Loading report data from {}...", source),
            Message::DataRefreshed => "Report data updated".to_string(),
            Message::DataUnavailable(reason) => format!("Report data unavailable: {}", reason),
            Message::NoSourceConfigured => {
                "No report data source. Pass --input, --url or --demo, or run `deskreport init`.".to_string()
            }
            Message::ModelWarningsHeader(count) => format!("The report data has {} consistency warning(s):", count),

            // === REPORT VIEW MESSAGES ===
            Message::ReportHeader(period) => format!("Attendance report ({})", period),
            Message::SectionMetrics => "Key metrics".to_string(),
            Message::SectionStatus => "Attendance status".to_string(),
            Message::SectionChannels => "Distribution by channel".to_string(),
            Message::SectionAgents => "Agent productivity".to_string(),
            Message::SectionSentiment => "Sentiment overview".to_string(),
            Message::NoAgents => "No agent productivity data".to_string(),
            Message::SentimentNeedsAttention(tone) => {
                format!("Overall customer tone is {}; review recent conversations", tone)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleExport => "Export settings".to_string(),
            Message::ConfigModuleSource => "Data source settings".to_string(),
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptOutputDir => "Output directory".to_string(),
            Message::PromptFileNameHint => "Base file name".to_string(),
            Message::PromptPeriodLabel => "Default period label".to_string(),
            Message::PromptSourceUrl => "Report data URL (leave empty to skip)".to_string(),
            Message::PromptSourcePath => "Report data file (leave empty to skip)".to_string(),
            Message::PromptTimeoutSecs => "Data request timeout in seconds".to_string(),

            // === INPUT MESSAGES ===
            Message::InvalidDateRange(from, to) => format!("Invalid date range: {} is after {}", from, to),
            Message::IncompleteDateRange => "Both --from and --to are required for a custom period".to_string(),
        };
        write!(f, "{}", s)
    }
}
