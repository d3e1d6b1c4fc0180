//! Journal entry model and built-in sample entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single journal record with text content, date and mood metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u32,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    /// Mood score in [0, 10], higher is more positive
    pub mood: u8,
    /// Display label, supplied independently of `mood`
    pub mood_label: String,
    #[serde(default)]
    pub emotions: Vec<String>,
}

impl JournalEntry {
    pub fn new(
        id: u32,
        date: NaiveDate,
        title: impl Into<String>,
        content: impl Into<String>,
        mood: u8,
        mood_label: impl Into<String>,
    ) -> Self {
        JournalEntry {
            id,
            date,
            title: title.into(),
            content: content.into(),
            mood,
            mood_label: mood_label.into(),
            emotions: Vec::new(),
        }
    }

    /// Append emotion tags in display order
    pub fn with_emotions<I, S>(mut self, emotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emotions.extend(emotions.into_iter().map(Into::into));
        self
    }
}

impl AsRef<JournalEntry> for JournalEntry {
    fn as_ref(&self) -> &JournalEntry {
        self
    }
}

fn seed_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, day).unwrap_or_default()
}

/// The five sample entries shipped with the application
pub fn sample_entries() -> Vec<JournalEntry> {
    vec![
        JournalEntry::new(
            1,
            seed_date(15),
            "Daily Reflection",
            "Had a productive day at work. Felt accomplished after completing the project \
             ahead of schedule. Met with friends for dinner and enjoyed catching up.",
            8,
            "Happy",
        )
        .with_emotions(["Productive", "Social", "Relaxed"]),
        JournalEntry::new(
            2,
            seed_date(14),
            "Mixed Feelings",
            "Feeling a bit stressed about the upcoming presentation. Need to prepare better. \
             However, the morning meditation session helped calm my nerves somewhat.",
            4,
            "Anxious",
        )
        .with_emotions(["Stressed", "Worried", "Focused"]),
        JournalEntry::new(
            3,
            seed_date(13),
            "Great Day",
            "Spent time with friends today. It was really refreshing to catch up after so long. \
             We went hiking and the weather was perfect.",
            9,
            "Very Happy",
        )
        .with_emotions(["Joyful", "Energetic", "Connected"]),
        JournalEntry::new(
            4,
            seed_date(12),
            "Monday Blues",
            "Started the week feeling a bit down. Work was overwhelming and I didn't sleep \
             well last night. Need to focus on better sleep habits.",
            3,
            "Sad",
        )
        .with_emotions(["Tired", "Overwhelmed", "Unmotivated"]),
        JournalEntry::new(
            5,
            seed_date(11),
            "Weekend Reflection",
            "Had a relaxing weekend at home. Caught up on reading and did some light cleaning. \
             Feeling ready for the week ahead despite some lingering worries.",
            6,
            "Content",
        )
        .with_emotions(["Calm", "Rested", "Thoughtful"]),
    ]
}
