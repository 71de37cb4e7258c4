#[cfg(test)]
mod tests {
    use deskreport::libs::error::ReportError;
    use deskreport::libs::model::{Channel, HourlyVolume, ModelWarning, ReportModel};
    use deskreport::libs::source::DemoSource;

    const REPORT_JSON: &str = r#"{
        "attendance": { "total": 10, "resolved": 7, "pending": 3,
                        "averageDuration": "3m 10s", "satisfaction": 4.2 },
        "agents": { "total": 2, "active": 1, "productivity": [
            { "name": "Ana", "attendanceCount": 6, "averageDuration": "3m", "satisfaction": 4.5 },
            { "name": "Rui", "attendanceCount": 4, "averageDuration": "4m", "satisfaction": 3.9 } ] },
        "channels": { "whatsapp": 5, "chatInterno": 3, "email": 2 },
        "hourlyVolume": [ { "hourLabel": "09:00", "volume": 4 }, { "hourLabel": "10:00", "volume": 6 } ],
        "metrics": { "averageResponseTime": "1m 05s", "resolutionRate": 70.0, "nps": 12.5, "dailyVolume": 10 }
    }"#;

    #[test]
    fn test_parse_camel_case_json() {
        let model = ReportModel::from_json(REPORT_JSON).unwrap();

        let attendance = model.attendance().unwrap();
        assert_eq!(attendance.total, 10);
        assert_eq!(attendance.average_duration, "3m 10s");
        assert_eq!(model.agents().unwrap().productivity.len(), 2);
        assert_eq!(model.agents().unwrap().productivity[1].name, "Rui");
        assert_eq!(model.hourly_volume().unwrap().len(), 2);
        assert_eq!(model.metrics().unwrap().daily_volume, 10);
        assert!(model.sentiment.is_none());
    }

    #[test]
    fn test_channel_aliases_map_to_internal_chat() {
        let model = ReportModel::from_json(REPORT_JSON).unwrap();
        assert_eq!(model.channel_count(Channel::InternalChat), 3);
        assert_eq!(model.channel_sum(), 10);

        let legacy = r#"{ "channels": { "chat": 9 } }"#;
        let model = ReportModel::from_json(legacy).unwrap();
        assert_eq!(model.channel_count(Channel::InternalChat), 9);
        assert_eq!(model.channel_count(Channel::Email), 0);
    }

    #[test]
    fn test_channels_serialize_with_canonical_id() {
        let json = serde_json::to_string(&DemoSource::model()).unwrap();
        assert!(json.contains("\"internal_chat\":267"));
        assert!(json.contains("\"hourlyVolume\""));
        assert!(!json.contains("chatInterno"));
    }

    #[test]
    fn test_missing_sections_parse_but_fail_on_access() {
        let model = ReportModel::from_json("{}").unwrap();

        assert!(model.channels.is_empty());
        for result in [
            model.attendance().map(|_| ()),
            model.agents().map(|_| ()),
            model.hourly_volume().map(|_| ()),
            model.metrics().map(|_| ()),
        ] {
            assert!(matches!(result, Err(ReportError::Formatting(_))));
        }
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(ReportModel::from_json("{ not json"), Err(ReportError::Json(_))));
    }

    #[test]
    fn test_demo_model_is_consistent() {
        assert!(DemoSource::model().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_soft_problems() {
        let mut model = ReportModel::from_json(REPORT_JSON).unwrap();
        if let Some(attendance) = model.attendance.as_mut() {
            attendance.pending = 5;
        }
        if let Some(metrics) = model.metrics.as_mut() {
            metrics.resolution_rate = 120.0;
        }
        model.hourly_volume = Some(vec![
            HourlyVolume {
                hour_label: "10:00".to_string(),
                volume: 1,
            },
            HourlyVolume {
                hour_label: "09:00".to_string(),
                volume: 1,
            },
            HourlyVolume {
                hour_label: "noon".to_string(),
                volume: 1,
            },
        ]);

        let warnings = model.validate();
        assert!(warnings.contains(&ModelWarning::StatusExceedsTotal {
            resolved: 7,
            pending: 5,
            total: 10
        }));
        assert!(warnings.contains(&ModelWarning::ResolutionRateOutOfRange(120.0)));
        assert!(warnings.contains(&ModelWarning::HourlyOutOfOrder {
            previous: "10:00".to_string(),
            next: "09:00".to_string()
        }));
        assert!(warnings.contains(&ModelWarning::HourLabelInvalid("noon".to_string())));
    }

    #[test]
    fn test_channel_mismatch_warning() {
        let mut model = DemoSource::model();
        model.channels.insert(Channel::Email, 0);

        let warnings = model.validate();
        assert_eq!(
            warnings,
            vec![ModelWarning::ChannelMismatch {
                channel_sum: 1123,
                total: 1247
            }]
        );
        assert!(warnings[0].to_string().contains("1123"));
    }
}
