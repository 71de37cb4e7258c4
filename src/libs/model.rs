//! The report model: an immutable analytics snapshot handed to the export pipeline.
//!
//! A [`ReportModel`] is produced by a data source (see [`crate::libs::source`])
//! and never mutated by the exporters. Its JSON form uses camelCase keys:
//!
//! ```json
//! {
//!   "attendance": { "total": 1247, "resolved": 1089, "pending": 158,
//!                   "averageDuration": "4m 32s", "satisfaction": 4.6 },
//!   "agents": { "total": 12, "active": 8, "productivity": [
//!       { "name": "Ana Silva", "attendanceCount": 89,
//!         "averageDuration": "3m 45s", "satisfaction": 4.8 } ] },
//!   "channels": { "whatsapp": 856, "internal_chat": 267, "email": 124 },
//!   "hourlyVolume": [ { "hourLabel": "08:00", "volume": 45 } ],
//!   "metrics": { "averageResponseTime": "2m 15s", "resolutionRate": 87.3,
//!                "nps": 8.4, "dailyVolume": 147 }
//! }
//! ```
//!
//! ## Required Sections
//!
//! `attendance`, `agents`, `hourlyVolume` and `metrics` must be present for the
//! model to be formatted; their absence is reported as a formatting error that
//! names the section. `channels` defaults to an empty map and `sentiment` is
//! optional display data.
//!
//! ## Consistency
//!
//! Cross-field rules (resolved + pending against total, channel sum against
//! total, value ranges) are soft: [`ReportModel::validate`] lists them as
//! warnings and never blocks an export.

use super::error::{ReportError, ReportResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Headline attendance counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total: u64,
    pub resolved: u64,
    pub pending: u64,
    /// Pre-formatted duration such as "4m 32s".
    pub average_duration: String,
    /// Average customer satisfaction on a 0-5 scale.
    pub satisfaction: f64,
}

/// Per-agent productivity line. Order is controlled by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStat {
    pub name: String,
    pub attendance_count: u64,
    pub average_duration: String,
    pub satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub total: u64,
    pub active: u64,
    #[serde(default)]
    pub productivity: Vec<AgentStat>,
}

/// Communication medium of an attendance.
///
/// `internal_chat` is the canonical identifier; `chat` and `chatInterno` are
/// accepted on input only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "whatsapp")]
    Whatsapp,
    #[serde(rename = "internal_chat", alias = "chatInterno", alias = "chat")]
    InternalChat,
    #[serde(rename = "email")]
    Email,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Whatsapp, Channel::InternalChat, Channel::Email];

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Whatsapp => "WhatsApp",
            Channel::InternalChat => "Internal Chat",
            Channel::Email => "Email",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Attendance volume for one hour bucket, e.g. `"09:00"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyVolume {
    pub hour_label: String,
    pub volume: u64,
}

/// Service-level indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub average_response_time: String,
    /// Percentage in [0, 100].
    pub resolution_rate: f64,
    /// Net Promoter Score in [-100, 100].
    pub nps: f64,
    pub daily_volume: u64,
}

/// Aggregated sentiment figures shown next to the report. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentOverview {
    pub total_analyzed: u64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    /// Mean score in [-1, 1].
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance: Option<AttendanceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<AgentSummary>,
    #[serde(default)]
    pub channels: BTreeMap<Channel, u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_volume: Option<Vec<HourlyVolume>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<KeyMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentOverview>,
}

/// A soft consistency problem found in a model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelWarning {
    /// resolved + pending exceeds total
    StatusExceedsTotal { resolved: u64, pending: u64, total: u64 },
    /// channel counts do not add up to the attendance total
    ChannelMismatch { channel_sum: u64, total: u64 },
    SatisfactionOutOfRange(String, f64),
    ResolutionRateOutOfRange(f64),
    NpsOutOfRange(f64),
    HourlyOutOfOrder { previous: String, next: String },
    HourLabelInvalid(String),
}

impl fmt::Display for ModelWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelWarning::StatusExceedsTotal { resolved, pending, total } => {
                write!(f, "Resolved ({}) plus pending ({}) exceeds total attendance ({})", resolved, pending, total)
            }
            ModelWarning::ChannelMismatch { channel_sum, total } => {
                write!(f, "Channel counts sum to {} but total attendance is {}", channel_sum, total)
            }
            ModelWarning::SatisfactionOutOfRange(owner, value) => {
                write!(f, "Satisfaction {} for {} is outside 0-5", value, owner)
            }
            ModelWarning::ResolutionRateOutOfRange(value) => write!(f, "Resolution rate {} is outside 0-100", value),
            ModelWarning::NpsOutOfRange(value) => write!(f, "NPS {} is outside -100..100", value),
            ModelWarning::HourlyOutOfOrder { previous, next } => {
                write!(f, "Hour bucket {} follows {} out of chronological order", next, previous)
            }
            ModelWarning::HourLabelInvalid(label) => write!(f, "Hour label '{}' is not in HH:MM form", label),
        }
    }
}

fn missing(section: &str) -> ReportError {
    ReportError::Formatting(format!("report model is missing the '{}' section", section))
}

impl ReportModel {
    /// Builds a complete model from its sections.
    pub fn new(
        attendance: AttendanceSummary,
        agents: AgentSummary,
        channels: BTreeMap<Channel, u64>,
        hourly_volume: Vec<HourlyVolume>,
        metrics: KeyMetrics,
    ) -> Self {
        Self {
            attendance: Some(attendance),
            agents: Some(agents),
            channels,
            hourly_volume: Some(hourly_volume),
            metrics: Some(metrics),
            sentiment: None,
        }
    }

    pub fn from_json(json: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn attendance(&self) -> ReportResult<&AttendanceSummary> {
        self.attendance.as_ref().ok_or_else(|| missing("attendance"))
    }

    pub fn agents(&self) -> ReportResult<&AgentSummary> {
        self.agents.as_ref().ok_or_else(|| missing("agents"))
    }

    pub fn hourly_volume(&self) -> ReportResult<&[HourlyVolume]> {
        self.hourly_volume.as_deref().ok_or_else(|| missing("hourlyVolume"))
    }

    pub fn metrics(&self) -> ReportResult<&KeyMetrics> {
        self.metrics.as_ref().ok_or_else(|| missing("metrics"))
    }

    pub fn channel_count(&self, channel: Channel) -> u64 {
        self.channels.get(&channel).copied().unwrap_or(0)
    }

    pub fn channel_sum(&self) -> u64 {
        self.channels.values().sum()
    }

    /// Lists soft consistency problems. Missing sections are not reported here;
    /// they surface as formatting errors.
    pub fn validate(&self) -> Vec<ModelWarning> {
        let mut warnings = Vec::new();

        if let Some(attendance) = &self.attendance {
            if attendance.resolved + attendance.pending > attendance.total {
                warnings.push(ModelWarning::StatusExceedsTotal {
                    resolved: attendance.resolved,
                    pending: attendance.pending,
                    total: attendance.total,
                });
            }
            let channel_sum = self.channel_sum();
            if channel_sum != attendance.total {
                warnings.push(ModelWarning::ChannelMismatch {
                    channel_sum,
                    total: attendance.total,
                });
            }
            if !(0.0..=5.0).contains(&attendance.satisfaction) {
                warnings.push(ModelWarning::SatisfactionOutOfRange("all attendances".to_string(), attendance.satisfaction));
            }
        }

        if let Some(agents) = &self.agents {
            for agent in &agents.productivity {
                if !(0.0..=5.0).contains(&agent.satisfaction) {
                    warnings.push(ModelWarning::SatisfactionOutOfRange(agent.name.clone(), agent.satisfaction));
                }
            }
        }

        if let Some(metrics) = &self.metrics {
            if !(0.0..=100.0).contains(&metrics.resolution_rate) {
                warnings.push(ModelWarning::ResolutionRateOutOfRange(metrics.resolution_rate));
            }
            if !(-100.0..=100.0).contains(&metrics.nps) {
                warnings.push(ModelWarning::NpsOutOfRange(metrics.nps));
            }
        }

        if let Some(hourly) = &self.hourly_volume {
            let mut previous: Option<(NaiveTime, &str)> = None;
            for bucket in hourly {
                match NaiveTime::parse_from_str(&bucket.hour_label, "%H:%M") {
                    Ok(time) => {
                        if let Some((prev_time, prev_label)) = previous {
                            if time <= prev_time {
                                warnings.push(ModelWarning::HourlyOutOfOrder {
                                    previous: prev_label.to_string(),
                                    next: bucket.hour_label.clone(),
                                });
                            }
                        }
                        previous = Some((time, &bucket.hour_label));
                    }
                    Err(_) => warnings.push(ModelWarning::HourLabelInvalid(bucket.hour_label.clone())),
                }
            }
        }

        warnings
    }
}
