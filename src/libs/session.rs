//! Holds the report snapshot shown to the user.
//!
//! A refresh replaces the whole model behind a new `Arc`; it never patches
//! fields in place. Exports take the current `Arc`, so an export that is
//! already running keeps reading the snapshot it started with.

use super::error::{ReportError, ReportResult};
use super::model::ReportModel;
use super::source::ReportSource;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ReportSession {
    source: Arc<dyn ReportSource>,
    timeout: Duration,
    current: RwLock<Option<Arc<ReportModel>>>,
}

impl ReportSession {
    pub fn new(source: Arc<dyn ReportSource>, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            current: RwLock::new(None),
        }
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Fetches a new model and swaps it in.
    ///
    /// On failure or timeout the previous snapshot is kept and
    /// [`ReportError::DataUnavailable`] is returned.
    pub async fn refresh(&self) -> ReportResult<Arc<ReportModel>> {
        let model = tokio::time::timeout(self.timeout, self.source.refresh())
            .await
            .map_err(|_| {
                ReportError::DataUnavailable(format!(
                    "{} did not respond within {} ms",
                    self.source.describe(),
                    self.timeout.as_millis()
                ))
            })??;

        let model = Arc::new(model);
        *self.current.write() = Some(Arc::clone(&model));
        tracing::debug!(source = %self.source.describe(), "report snapshot replaced");
        Ok(model)
    }

    pub fn snapshot(&self) -> Option<Arc<ReportModel>> {
        self.current.read().clone()
    }
}
