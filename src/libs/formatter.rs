//! Display formatting shared by the PDF and Excel exporters.
//!
//! Both outputs render from the same [`FormattedRows`], so a label or a value
//! can never differ between the document and the workbook.
//!
//! ## Number Formatting
//!
//! - Percentages always carry exactly one decimal place and a trailing `%`:
//!   `87.3` → `"87.3%"`, `100` → `"100.0%"`.
//! - Other reals are rounded to one decimal place and printed without a
//!   decimal part when the rounded value is integral: `4.6` → `"4.6"`,
//!   `5.0` → `"5"`, `4.96` → `"5"`.
//! - Counts are printed as plain integers.
//!
//! Every [`Cell`] keeps its typed value next to its display text so the
//! workbook can store native numbers while the document prints the text.
//!
//! ## Examples
//!
//! ```rust
//! use deskreport::libs::formatter::{format_percent, format_real};
//!
//! assert_eq!(format_percent(87.3), "87.3%");
//! assert_eq!(format_percent(100.0), "100.0%");
//! assert_eq!(format_real(4.6), "4.6");
//! assert_eq!(format_real(5.0), "5");
//! ```

use super::error::{ReportError, ReportResult};
use super::model::ReportModel;
use serde::{Deserialize, Serialize};

pub const LABEL_TOTAL_ATTENDANCE: &str = "Total Attendance";
pub const LABEL_RESOLVED: &str = "Resolved";
pub const LABEL_AVERAGE_DURATION: &str = "Average Duration";
pub const LABEL_RESOLUTION_RATE: &str = "Resolution Rate";
pub const LABEL_NPS: &str = "NPS";
pub const LABEL_AVERAGE_SATISFACTION: &str = "Average Satisfaction";

/// Headline metric labels in the order both outputs print them.
pub const HEADLINE_LABELS: [&str; 6] = [
    LABEL_TOTAL_ATTENDANCE,
    LABEL_RESOLVED,
    LABEL_AVERAGE_DURATION,
    LABEL_RESOLUTION_RATE,
    LABEL_NPS,
    LABEL_AVERAGE_SATISFACTION,
];

pub const METRIC_HEADERS: [&str; 2] = ["Metric", "Value"];
pub const AGENT_HEADERS: [&str; 4] = ["Name", "Attendance Count", "Average Duration", "Satisfaction"];
pub const HOURLY_HEADERS: [&str; 2] = ["Hour", "Volume"];

/// Typed value behind a formatted cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Integral or real number, stored natively in the workbook.
    Number(f64),
    /// Percentage in [0, 100], stored natively with a percent display format.
    Percent(f64),
    /// Inherently textual values such as "4m 32s".
    Text,
}

/// A display string plus the value it was rendered from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub value: CellValue,
}

impl Cell {
    pub fn count(value: u64) -> Self {
        Self {
            text: value.to_string(),
            value: CellValue::Number(value as f64),
        }
    }

    pub fn real(value: f64) -> Self {
        Self {
            text: format_real(value),
            value: CellValue::Number(value),
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            text: format_percent(value),
            value: CellValue::Percent(value),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: value.into(),
            value: CellValue::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub label: String,
    pub value: Cell,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRow {
    pub name: String,
    pub attendance_count: Cell,
    pub average_duration: String,
    pub satisfaction: Cell,
}

impl AgentRow {
    /// The row as printed text, in [`AGENT_HEADERS`] order.
    pub fn texts(&self) -> [&str; 4] {
        [&self.name, &self.attendance_count.text, &self.average_duration, &self.satisfaction.text]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRow {
    pub hour_label: String,
    pub volume: Cell,
}

/// Display-ready rows for every exported section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormattedRows {
    pub headline: Vec<MetricRow>,
    pub agents: Vec<AgentRow>,
    pub hourly: Vec<HourlyRow>,
}

impl FormattedRows {
    /// Confirms the headline rows carry exactly the expected labels in order.
    ///
    /// Builders call this before writing anything so a malformed row set never
    /// produces a partial artifact.
    pub fn check_headline(&self) -> ReportResult<()> {
        for (index, expected) in HEADLINE_LABELS.iter().enumerate() {
            match self.headline.get(index) {
                Some(row) if row.label == *expected => {}
                Some(row) => {
                    return Err(ReportError::Formatting(format!(
                        "headline row {} is '{}', expected '{}'",
                        index + 1,
                        row.label,
                        expected
                    )))
                }
                None => return Err(ReportError::Formatting(format!("headline row '{}' is missing", expected))),
            }
        }
        if self.headline.len() > HEADLINE_LABELS.len() {
            return Err(ReportError::Formatting(format!(
                "expected {} headline rows, found {}",
                HEADLINE_LABELS.len(),
                self.headline.len()
            )));
        }
        Ok(())
    }
}

/// Formats a percentage with exactly one decimal place: `87.3` → `"87.3%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats a real with at most one decimal place, dropping it when integral.
pub fn format_real(value: f64) -> String {
    // adding zero folds -0.0 into 0.0
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

fn finite(value: f64, field: &str) -> ReportResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ReportError::Formatting(format!("{} is not a finite number", field)))
    }
}

/// Converts a model into display rows.
///
/// Pure: the same model always yields the same rows. Agent and hourly rows
/// keep the model's order. Empty agent or hourly lists produce empty
/// sections; a missing section is a [`ReportError::Formatting`].
pub fn format(model: &ReportModel) -> ReportResult<FormattedRows> {
    let attendance = model.attendance()?;
    let agents = model.agents()?;
    let hourly = model.hourly_volume()?;
    let metrics = model.metrics()?;

    let headline = vec![
        MetricRow {
            label: LABEL_TOTAL_ATTENDANCE.to_string(),
            value: Cell::count(attendance.total),
        },
        MetricRow {
            label: LABEL_RESOLVED.to_string(),
            value: Cell::count(attendance.resolved),
        },
        MetricRow {
            label: LABEL_AVERAGE_DURATION.to_string(),
            value: Cell::text(attendance.average_duration.clone()),
        },
        MetricRow {
            label: LABEL_RESOLUTION_RATE.to_string(),
            value: Cell::percent(finite(metrics.resolution_rate, "metrics.resolutionRate")?),
        },
        MetricRow {
            label: LABEL_NPS.to_string(),
            value: Cell::real(finite(metrics.nps, "metrics.nps")?),
        },
        MetricRow {
            label: LABEL_AVERAGE_SATISFACTION.to_string(),
            value: Cell::real(finite(attendance.satisfaction, "attendance.satisfaction")?),
        },
    ];

    let agents = agents
        .productivity
        .iter()
        .map(|agent| {
            Ok(AgentRow {
                name: agent.name.clone(),
                attendance_count: Cell::count(agent.attendance_count),
                average_duration: agent.average_duration.clone(),
                satisfaction: Cell::real(finite(agent.satisfaction, "agent satisfaction")?),
            })
        })
        .collect::<ReportResult<Vec<_>>>()?;

    let hourly = hourly
        .iter()
        .map(|bucket| HourlyRow {
            hour_label: bucket.hour_label.clone(),
            volume: Cell::count(bucket.volume),
        })
        .collect();

    Ok(FormattedRows { headline, agents, hourly })
}
