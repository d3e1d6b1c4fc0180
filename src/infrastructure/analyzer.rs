//! Sentiment analysis boundary

use crate::error::Result;
use serde::Serialize;

/// One detected emotion with its share in percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionScore {
    pub name: String,
    pub score: u8,
}

impl EmotionScore {
    pub fn new(name: impl Into<String>, score: u8) -> Self {
        EmotionScore {
            name: name.into(),
            score,
        }
    }
}

/// Response of a sentiment analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentReport {
    /// Detected mood score in [0, 10]
    pub mood: u8,
    pub emotions: Vec<EmotionScore>,
    pub summary: String,
}

/// Anything that can score a journal text
pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentReport>;
}

/// Stand-in analyzer returning a fixed report
#[derive(Debug, Clone, Default)]
pub struct MockSentimentAnalyzer;

impl SentimentAnalyzer for MockSentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentReport> {
        tracing::debug!(chars = text.chars().count(), "mock sentiment analysis");

        Ok(SentimentReport {
            mood: 7,
            emotions: vec![
                EmotionScore::new("Productive", 35),
                EmotionScore::new("Anxious", 25),
                EmotionScore::new("Optimistic", 20),
                EmotionScore::new("Stressed", 15),
                EmotionScore::new("Content", 5),
            ],
            summary: "Your entry shows a mix of positive productivity and mild anxiety. \
                      You seem optimistic overall while managing some stress about deadlines."
                .to_string(),
        })
    }
}
