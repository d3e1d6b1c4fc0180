//! Dashboard summary use case
//!
//! Recent entries, an average mood, a mood trend and an emotion breakdown,
//! all colored through the same mood scale and emotion palette as the list.

use crate::application::list_entries::ListedEntry;
use crate::domain::{
    sort_entries, ColorToken, EmotionPalette, JournalEntry, MoodClass, MoodScale, SortKey,
};
use crate::error::Result;
use crate::infrastructure::EntryRepository;
use chrono::NaiveDate;
use serde::Serialize;

/// One point of the mood trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mood: u8,
    pub class: MoodClass,
}

/// Share of one emotion tag across all entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionShare {
    pub name: String,
    pub count: usize,
    /// Rounded percentage of all tags
    pub percent: u8,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub entry_count: usize,
    pub recent: Vec<ListedEntry>,
    pub average_mood: Option<f64>,
    /// Classification of the rounded average
    pub average_class: Option<MoodClass>,
    /// Oldest first
    pub trend: Vec<TrendPoint>,
    /// Most frequent first
    pub emotions: Vec<EmotionShare>,
}

pub struct DashboardService {
    repository: Box<dyn EntryRepository>,
    scale: MoodScale,
    palette: EmotionPalette,
}

impl DashboardService {
    pub fn new(
        repository: Box<dyn EntryRepository>,
        scale: MoodScale,
        palette: EmotionPalette,
    ) -> Self {
        DashboardService {
            repository,
            scale,
            palette,
        }
    }

    pub fn execute(&self, recent_limit: usize) -> Result<DashboardSummary> {
        let entries = self.repository.entries()?;

        let recent = sort_entries(&entries, SortKey::Newest)
            .into_iter()
            .take(recent_limit)
            .map(|entry| ListedEntry {
                class: self.scale.classify(entry.mood),
                entry,
            })
            .collect();

        let trend = sort_entries(&entries, SortKey::Oldest)
            .iter()
            .map(|entry| TrendPoint {
                date: entry.date,
                mood: entry.mood,
                class: self.scale.classify(entry.mood),
            })
            .collect();

        let average_mood = average_mood(&entries);
        let average_class = average_mood.map(|avg| self.scale.classify(avg.round() as u8));

        Ok(DashboardSummary {
            entry_count: entries.len(),
            recent,
            average_mood,
            average_class,
            trend,
            emotions: emotion_breakdown(&entries, &self.palette),
        })
    }
}

fn average_mood(entries: &[JournalEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|entry| u32::from(entry.mood)).sum();
    Some(f64::from(sum) / entries.len() as f64)
}

/// Count emotion tags; ties keep first-appearance order
fn emotion_breakdown(entries: &[JournalEntry], palette: &EmotionPalette) -> Vec<EmotionShare> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for name in entries.iter().flat_map(|entry| entry.emotions.iter()) {
        match counts.iter_mut().find(|(seen, _)| seen == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name.clone(), 1)),
        }
    }

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(name, count)| EmotionShare {
            color: palette.color_for(&name),
            percent: ((count * 100 + total / 2) / total) as u8,
            name,
            count,
        })
        .collect()
}
