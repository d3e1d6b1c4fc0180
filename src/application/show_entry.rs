//! Show a single entry

use crate::domain::{ColorToken, EmotionPalette, JournalEntry, MoodClass, MoodScale};
use crate::error::Result;
use crate::infrastructure::EntryRepository;

/// An entry with its mood classification and colored emotion chips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetail {
    pub entry: JournalEntry,
    pub class: MoodClass,
    pub emotions: Vec<(String, ColorToken)>,
}

pub struct ShowEntryService {
    repository: Box<dyn EntryRepository>,
    scale: MoodScale,
    palette: EmotionPalette,
}

impl ShowEntryService {
    pub fn new(
        repository: Box<dyn EntryRepository>,
        scale: MoodScale,
        palette: EmotionPalette,
    ) -> Self {
        ShowEntryService {
            repository,
            scale,
            palette,
        }
    }

    pub fn execute(&self, id: u32) -> Result<EntryDetail> {
        let entry = self.repository.find(id)?;
        let emotions = entry
            .emotions
            .iter()
            .map(|name| (name.clone(), self.palette.color_for(name)))
            .collect();

        Ok(EntryDetail {
            class: self.scale.classify(entry.mood),
            emotions,
            entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoodlogError;
    use crate::infrastructure::SeedRepository;

    fn service(palette: EmotionPalette) -> ShowEntryService {
        ShowEntryService::new(Box::new(SeedRepository), MoodScale::default(), palette)
    }

    #[test]
    fn test_show_entry() {
        let detail = service(EmotionPalette::default()).execute(4).unwrap();
        assert_eq!(detail.entry.title, "Monday Blues");
        assert_eq!(detail.class.label, "Sad");
        assert_eq!(detail.class.color, ColorToken::Muted);

        let names: Vec<&str> = detail.emotions.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Tired", "Overwhelmed", "Unmotivated"]);
    }

    #[test]
    fn test_show_entry_emotion_colors() {
        let mut palette = EmotionPalette::default();
        palette.insert("Tired", ColorToken::Muted);

        let detail = service(palette).execute(4).unwrap();
        assert_eq!(detail.emotions[0].1, ColorToken::Muted);
        assert_eq!(detail.emotions[1].1, ColorToken::Primary);
    }

    #[test]
    fn test_show_missing_entry() {
        let result = service(EmotionPalette::default()).execute(42);
        assert!(matches!(result, Err(MoodlogError::EntryNotFound(42))));
    }
}
