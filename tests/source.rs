#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use deskreport::libs::error::{ReportError, ReportResult};
    use deskreport::libs::model::ReportModel;
    use deskreport::libs::session::ReportSession;
    use deskreport::libs::source::{DemoSource, HttpSource, JsonFileSource, ReportSource};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    /// Replays queued results, optionally after a delay.
    struct ScriptedSource {
        delay: Duration,
        results: Mutex<Vec<ReportResult<ReportModel>>>,
    }

    impl ScriptedSource {
        fn new(delay: Duration, mut results: Vec<ReportResult<ReportModel>>) -> Self {
            results.reverse();
            Self {
                delay,
                results: Mutex::new(results),
            }
        }
    }

    #[async_trait]
    impl ReportSource for ScriptedSource {
        fn describe(&self) -> String {
            "scripted".to_string()
        }

        async fn refresh(&self) -> ReportResult<ReportModel> {
            tokio::time::sleep(self.delay).await;
            self.results
                .lock()
                .pop()
                .unwrap_or_else(|| Err(ReportError::DataUnavailable("exhausted".to_string())))
        }
    }

    struct SourceTestContext {
        temp_dir: TempDir,
    }

    impl AsyncTestContext for SourceTestContext {
        async fn setup() -> Self {
            SourceTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_json_file_source(ctx: &mut SourceTestContext) {
        let path = ctx.temp_dir.path().join("report.json");
        std::fs::write(&path, serde_json::to_string(&DemoSource::model()).unwrap()).unwrap();

        let model = JsonFileSource::new(&path).refresh().await.unwrap();
        assert_eq!(model, DemoSource::model());
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_missing_file_is_unavailable(ctx: &mut SourceTestContext) {
        let source = JsonFileSource::new(ctx.temp_dir.path().join("missing.json"));

        assert!(matches!(source.refresh().await, Err(ReportError::DataUnavailable(_))));
        assert!(source.describe().ends_with("missing.json"));
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_malformed_file_is_unavailable(ctx: &mut SourceTestContext) {
        let path = ctx.temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ \"attendance\": 12 }").unwrap();

        let result = JsonFileSource::new(&path).refresh().await;
        assert!(matches!(result, Err(ReportError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn test_unreachable_http_source_is_unavailable() {
        let source = HttpSource::new("http://127.0.0.1:9/report", Duration::from_secs(2)).unwrap();

        assert_eq!(source.describe(), "http://127.0.0.1:9/report");
        assert!(matches!(source.refresh().await, Err(ReportError::DataUnavailable(_))));
    }

    #[tokio::test]
    async fn test_demo_source() {
        let model = DemoSource.refresh().await.unwrap();
        assert_eq!(model.attendance().unwrap().total, 1247);
        assert_eq!(model.agents().unwrap().productivity.len(), 4);
        assert_eq!(model.hourly_volume().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_session_replaces_snapshot() {
        let mut second = DemoSource::model();
        if let Some(attendance) = second.attendance.as_mut() {
            attendance.total = 2000;
        }
        let source = ScriptedSource::new(Duration::ZERO, vec![Ok(DemoSource::model()), Ok(second)]);
        let session = ReportSession::new(Arc::new(source), Duration::from_secs(1));
        assert!(session.snapshot().is_none());

        let first = session.refresh().await.unwrap();
        let held = session.snapshot().unwrap();
        assert!(Arc::ptr_eq(&first, &held));

        let replaced = session.refresh().await.unwrap();
        assert_eq!(replaced.attendance().unwrap().total, 2000);
        // an earlier snapshot is never patched in place
        assert_eq!(held.attendance().unwrap().total, 1247);
        assert!(Arc::ptr_eq(&replaced, &session.snapshot().unwrap()));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_snapshot() {
        let source = ScriptedSource::new(
            Duration::ZERO,
            vec![
                Ok(DemoSource::model()),
                Err(ReportError::DataUnavailable("backend down".to_string())),
            ],
        );
        let session = ReportSession::new(Arc::new(source), Duration::from_secs(1));

        let first = session.refresh().await.unwrap();
        assert!(matches!(session.refresh().await, Err(ReportError::DataUnavailable(_))));
        assert!(Arc::ptr_eq(&first, &session.snapshot().unwrap()));
    }

    #[tokio::test]
    async fn test_refresh_timeout() {
        let source = ScriptedSource::new(Duration::from_secs(5), vec![Ok(DemoSource::model())]);
        let session = ReportSession::new(Arc::new(source), Duration::from_millis(50));

        match session.refresh().await {
            Err(ReportError::DataUnavailable(reason)) => assert!(reason.contains("scripted")),
            other => panic!("expected timeout, got {:?}", other),
        }
        assert!(session.snapshot().is_none());
        assert_eq!(session.describe_source(), "scripted");
    }
}
