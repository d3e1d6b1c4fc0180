//! List entries use case

use crate::domain::{JournalEntry, JournalQuery, MoodClass, MoodScale};
use crate::error::Result;
use crate::infrastructure::EntryRepository;
use serde::Serialize;

/// An entry with its mood classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    #[serde(flatten)]
    pub entry: JournalEntry,
    pub class: MoodClass,
}

/// Outcome of running a query against the entry source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryListing {
    pub query: JournalQuery,
    pub total: usize,
    pub rows: Vec<ListedEntry>,
}

impl EntryListing {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Service for listing journal entries
pub struct ListEntriesService {
    repository: Box<dyn EntryRepository>,
    scale: MoodScale,
}

impl ListEntriesService {
    pub fn new(repository: Box<dyn EntryRepository>, scale: MoodScale) -> Self {
        ListEntriesService { repository, scale }
    }

    pub fn execute(&self, query: &JournalQuery) -> Result<EntryListing> {
        let entries = self.repository.entries()?;
        let view = query.apply(&entries, &self.scale);

        tracing::debug!(
            search = %query.search,
            sort = %query.sort,
            mood = %query.mood,
            matched = view.rows.len(),
            total = view.total,
            "listed entries"
        );

        Ok(EntryListing {
            query: view.query,
            total: view.total,
            rows: view
                .rows
                .into_iter()
                .map(|row| ListedEntry {
                    entry: row.entry.clone(),
                    class: row.class,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorToken, MoodBand, MoodBucket, SortKey};
    use crate::infrastructure::SeedRepository;

    fn service() -> ListEntriesService {
        ListEntriesService::new(Box::new(SeedRepository), MoodScale::default())
    }

    fn ids(listing: &EntryListing) -> Vec<u32> {
        listing.rows.iter().map(|row| row.entry.id).collect()
    }

    #[test]
    fn test_list_default_query() {
        let listing = service().execute(&JournalQuery::default()).unwrap();
        assert_eq!(ids(&listing), vec![1, 2, 3, 4, 5]);
        assert_eq!(listing.total, 5);
        assert_eq!(listing.rows[0].class.label, "Very Happy");
    }

    #[test]
    fn test_list_search_and_sort() {
        let query = JournalQuery::default()
            .with_search("week")
            .with_sort(SortKey::LowestMood);
        let listing = service().execute(&query).unwrap();
        // "week" is in entries 4 (mood 3) and 5 (mood 6)
        assert_eq!(ids(&listing), vec![4, 5]);
    }

    #[test]
    fn test_list_empty_result() {
        let query = JournalQuery::default()
            .with_search("hiking")
            .with_mood(MoodBucket::Sad);
        let listing = service().execute(&query).unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.total, 5);
    }

    #[test]
    fn test_list_uses_configured_scale() {
        let scale = MoodScale::new(vec![
            MoodBand::new(5, "Up", ColorToken::Success),
            MoodBand::new(0, "Down", ColorToken::Muted),
        ])
        .unwrap();
        let listing = ListEntriesService::new(Box::new(SeedRepository), scale)
            .execute(&JournalQuery::default())
            .unwrap();

        let labels: Vec<&str> = listing.rows.iter().map(|r| r.class.label.as_str()).collect();
        assert_eq!(labels, vec!["Up", "Down", "Up", "Down", "Up"]);
    }
}
