#[cfg(test)]
mod tests {
    use deskreport::commands::source::period_label;
    use deskreport::libs::config::{Config, ExportConfig, SourceConfig, CONFIG_FILE_NAME, DEFAULT_PERIOD_LABEL};
    use deskreport::libs::data_storage::DataStorage;
    use parking_lot::{const_mutex, Mutex, MutexGuard};
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide; tests that repoint it take turns.
    static HOME_LOCK: Mutex<()> = const_mutex(());

    /// Points the per-user data directory at a fresh temporary home.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());

        let export = config.export_settings();
        assert_eq!(export.output_dir, PathBuf::from("."));
        assert_eq!(export.file_name_hint, "attendance-report");
        assert_eq!(export.period_label, DEFAULT_PERIOD_LABEL);
        assert_eq!(config.source_settings().timeout(), Duration::from_secs(10));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            export: Some(ExportConfig {
                output_dir: PathBuf::from("/tmp/reports"),
                file_name_hint: "weekly".to_string(),
                period_label: "Last 7 days".to_string(),
            }),
            source: Some(SourceConfig {
                url: Some("https://analytics.example.com/report".to_string()),
                path: None,
                timeout_secs: 3,
            }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());
        let raw = std::fs::read_to_string(path).unwrap();
        assert!(!raw.contains("\"path\""));

        let read = Config::read().unwrap();
        assert_eq!(read, config);
        assert_eq!(read.source_settings().timeout(), Duration::from_secs(3));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_source_uses_default_timeout(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, r#"{ "source": { "path": "report.json" } }"#).unwrap();

        let config = Config::read().unwrap();
        let source = config.source_settings();
        assert_eq!(source.path, Some(PathBuf::from("report.json")));
        assert_eq!(source.timeout_secs, 10);
        assert!(config.export.is_none());
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(None, None, "Last 30 days").unwrap(), "Last 30 days");
        assert_eq!(
            period_label(Some("2024-03-01"), Some("2024-03-31"), "Last 30 days").unwrap(),
            "Custom: 2024-03-01 to 2024-03-31"
        );
        assert!(period_label(Some("2024-03-31"), Some("2024-03-01"), "x").is_err());
        assert!(period_label(Some("2024-03-01"), None, "x").is_err());
        assert!(period_label(Some("March"), Some("2024-03-31"), "x").is_err());
    }
}
