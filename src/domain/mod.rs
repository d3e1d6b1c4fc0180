//! Domain layer - Journal entries and the query engine

pub mod emotion;
pub mod entry;
pub mod mood;
pub mod query;

pub use emotion::{classify_emotion_color, EmotionPalette};
pub use entry::{sample_entries, JournalEntry};
pub use mood::{classify_mood, ColorToken, MoodBand, MoodBucket, MoodClass, MoodScale};
pub use query::{filter_entries, sort_entries, JournalQuery, JournalView, SortKey};
