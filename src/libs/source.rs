//! Report data sources.
//!
//! A [`ReportSource`] supplies a complete [`ReportModel`] on demand. The export
//! pipeline never fetches data itself; callers refresh a
//! [`crate::libs::session::ReportSession`] and export its snapshot.
//!
//! Available sources:
//!
//! - [`JsonFileSource`]: reads a model from a JSON file
//! - [`HttpSource`]: fetches a model from an HTTP endpoint with a request timeout
//! - [`DemoSource`]: returns the built-in sample dataset
//!
//! Every failure to produce a model is reported as
//! [`ReportError::DataUnavailable`]. A model that parses but lacks a section is
//! still returned; the formatter rejects it at export time.

use super::error::{ReportError, ReportResult};
use super::model::{
    AgentStat, AgentSummary, AttendanceSummary, Channel, HourlyVolume, KeyMetrics, ReportModel, SentimentOverview,
};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Short human-readable origin, used in messages.
    fn describe(&self) -> String;

    async fn refresh(&self) -> ReportResult<ReportModel>;
}

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn refresh(&self) -> ReportResult<ReportModel> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ReportError::DataUnavailable(format!("cannot read {}: {}", self.path.display(), e)))?;
        ReportModel::from_json(&json)
            .map_err(|e| ReportError::DataUnavailable(format!("{} is not a report model: {}", self.path.display(), e)))
    }
}

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> ReportResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::DataUnavailable(format!("cannot create HTTP client: {}", e)))?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl ReportSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn refresh(&self) -> ReportResult<ReportModel> {
        let unavailable = |e: reqwest::Error| ReportError::DataUnavailable(format!("{}: {}", self.url, e));

        let response = self.client.get(&self.url).send().await.map_err(unavailable)?;
        let response = response.error_for_status().map_err(unavailable)?;
        response.json::<ReportModel>().await.map_err(unavailable)
    }
}

/// Serves the bundled sample dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn model() -> ReportModel {
        let agent = |name: &str, attendance_count: u64, average_duration: &str, satisfaction: f64| AgentStat {
            name: name.to_string(),
            attendance_count,
            average_duration: average_duration.to_string(),
            satisfaction,
        };

        let hourly = [
            ("08:00", 45),
            ("09:00", 78),
            ("10:00", 95),
            ("11:00", 112),
            ("12:00", 87),
            ("13:00", 65),
            ("14:00", 89),
            ("15:00", 134),
            ("16:00", 156),
            ("17:00", 142),
            ("18:00", 98),
        ]
        .iter()
        .map(|(hour, volume)| HourlyVolume {
            hour_label: hour.to_string(),
            volume: *volume,
        })
        .collect();

        let channels = BTreeMap::from([(Channel::Whatsapp, 856), (Channel::InternalChat, 267), (Channel::Email, 124)]);

        let mut model = ReportModel::new(
            AttendanceSummary {
                total: 1247,
                resolved: 1089,
                pending: 158,
                average_duration: "4m 32s".to_string(),
                satisfaction: 4.6,
            },
            AgentSummary {
                total: 12,
                active: 8,
                productivity: vec![
                    agent("Ana Silva", 89, "3m 45s", 4.8),
                    agent("João Santos", 76, "4m 12s", 4.5),
                    agent("Maria Costa", 92, "3m 58s", 4.7),
                    agent("Pedro Lima", 65, "5m 22s", 4.3),
                ],
            },
            channels,
            hourly,
            KeyMetrics {
                average_response_time: "2m 15s".to_string(),
                resolution_rate: 87.3,
                nps: 8.4,
                daily_volume: 147,
            },
        );
        model.sentiment = Some(SentimentOverview {
            total_analyzed: 1247,
            positive: 58.3,
            neutral: 29.0,
            negative: 12.7,
            average_score: 0.34,
        });
        model
    }
}

#[async_trait]
impl ReportSource for DemoSource {
    fn describe(&self) -> String {
        "built-in demo data".to_string()
    }

    async fn refresh(&self) -> ReportResult<ReportModel> {
        Ok(Self::model())
    }
}
