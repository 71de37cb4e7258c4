//! Tone labels for sentiment scores.
//!
//! Scores arrive pre-computed in [`SentimentOverview`]; nothing here performs
//! inference. Adding an [`Emotion`] variant forces every match below to handle it.

use super::model::SentimentOverview;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Emotion {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl Emotion {
    /// Buckets a score in [-1, 1]. Values outside the range clamp to the ends.
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            Emotion::VeryPositive
        } else if score > 0.1 {
            Emotion::Positive
        } else if score >= -0.1 {
            Emotion::Neutral
        } else if score > -0.5 {
            Emotion::Negative
        } else {
            Emotion::VeryNegative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::VeryPositive => "Very Positive",
            Emotion::Positive => "Positive",
            Emotion::Neutral => "Neutral",
            Emotion::Negative => "Negative",
            Emotion::VeryNegative => "Very Negative",
        }
    }

    /// Short marker for console tables.
    pub fn symbol(&self) -> &'static str {
        match self {
            Emotion::VeryPositive => "++",
            Emotion::Positive => "+",
            Emotion::Neutral => "=",
            Emotion::Negative => "-",
            Emotion::VeryNegative => "--",
        }
    }

    /// Whether a message with this tone should be escalated to a supervisor.
    pub fn needs_attention(&self) -> bool {
        matches!(self, Emotion::VeryNegative)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl SentimentOverview {
    pub fn tone(&self) -> Emotion {
        Emotion::from_score(self.average_score)
    }
}
