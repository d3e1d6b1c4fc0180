//! Analyze a draft entry through a sentiment analyzer

use crate::domain::{ColorToken, EmotionPalette, MoodClass, MoodScale};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{SentimentAnalyzer, SentimentReport};

/// Analyzer output with the mood classified and emotions colored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryAnalysis {
    pub report: SentimentReport,
    pub class: MoodClass,
    pub emotion_colors: Vec<ColorToken>,
}

/// Service wrapping one analyzer. Requests take `&mut self`, so a service
/// has at most one analysis in flight.
pub struct AnalyzeEntryService<A: SentimentAnalyzer> {
    analyzer: A,
    scale: MoodScale,
    palette: EmotionPalette,
}

impl<A: SentimentAnalyzer> AnalyzeEntryService<A> {
    pub fn new(analyzer: A, scale: MoodScale, palette: EmotionPalette) -> Self {
        AnalyzeEntryService {
            analyzer,
            scale,
            palette,
        }
    }

    pub fn execute(&mut self, text: &str) -> Result<EntryAnalysis> {
        if text.trim().is_empty() {
            return Err(MoodlogError::EmptyEntry(
                "nothing to analyze".to_string(),
            ));
        }

        let report = self.analyzer.analyze(text)?;
        tracing::info!(mood = report.mood, "entry analyzed");

        let emotion_colors = report
            .emotions
            .iter()
            .map(|emotion| self.palette.color_for(&emotion.name))
            .collect();

        Ok(EntryAnalysis {
            class: self.scale.classify(report.mood),
            emotion_colors,
            report,
        })
    }
}
