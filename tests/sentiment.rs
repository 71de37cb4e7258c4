#[cfg(test)]
mod tests {
    use deskreport::libs::messages::Message;
    use deskreport::libs::model::SentimentOverview;
    use deskreport::libs::sentiment::Emotion;
    use deskreport::libs::source::DemoSource;
    use deskreport::libs::view::View;

    #[test]
    fn test_score_buckets() {
        assert_eq!(Emotion::from_score(0.9), Emotion::VeryPositive);
        assert_eq!(Emotion::from_score(0.5), Emotion::Positive);
        assert_eq!(Emotion::from_score(0.34), Emotion::Positive);
        assert_eq!(Emotion::from_score(0.1), Emotion::Neutral);
        assert_eq!(Emotion::from_score(0.0), Emotion::Neutral);
        assert_eq!(Emotion::from_score(-0.1), Emotion::Neutral);
        assert_eq!(Emotion::from_score(-0.3), Emotion::Negative);
        assert_eq!(Emotion::from_score(-0.5), Emotion::VeryNegative);
        assert_eq!(Emotion::from_score(-2.0), Emotion::VeryNegative);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Emotion::VeryPositive.to_string(), "Very Positive");
        assert_eq!(Emotion::Neutral.label(), "Neutral");
        assert_eq!(Emotion::VeryNegative.symbol(), "--");
        assert!(Emotion::VeryNegative.needs_attention());
        assert!(!Emotion::Negative.needs_attention());
    }

    #[test]
    fn test_demo_overview_tone() {
        let model = DemoSource::model();
        let sentiment = model.sentiment.as_ref().unwrap();
        assert_eq!(sentiment.tone(), Emotion::Positive);
    }

    #[test]
    fn test_very_negative_overview_is_flagged() {
        let overview = SentimentOverview {
            total_analyzed: 40,
            positive: 10.0,
            neutral: 15.0,
            negative: 75.0,
            average_score: -0.72,
        };
        assert_eq!(overview.tone(), Emotion::VeryNegative);
        assert!(overview.tone().needs_attention());
        assert!(View::sentiment(&overview).is_ok());

        let text = Message::SentimentNeedsAttention(overview.tone().to_string()).to_string();
        assert!(text.contains("Very Negative"));
    }
}
