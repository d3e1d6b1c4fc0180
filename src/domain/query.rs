//! Journal list query: filtering, sorting and the list view model
//!
//! A [`JournalQuery`] is an immutable value holding the search term, sort key
//! and mood bucket. [`JournalQuery::apply`] recomputes the whole view from the
//! entry collection every time any field changes.
//!
//! # Examples
//!
//! ```
//! use moodlog::domain::entry::sample_entries;
//! use moodlog::domain::mood::MoodScale;
//! use moodlog::domain::query::{JournalQuery, SortKey};
//!
//! let entries = sample_entries();
//! let query = JournalQuery::default().with_sort(SortKey::LowestMood);
//! let view = query.apply(&entries, &MoodScale::default());
//! assert_eq!(view.rows[0].entry.mood, 3);
//! ```

use crate::domain::entry::JournalEntry;
use crate::domain::mood::{MoodBucket, MoodClass, MoodScale};
use crate::error::{MoodlogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display order of the journal list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    HighestMood,
    LowestMood,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::HighestMood => "highest-mood",
            SortKey::LowestMood => "lowest-mood",
        }
    }
}

impl FromStr for SortKey {
    type Err = MoodlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "highest-mood" => Ok(SortKey::HighestMood),
            "lowest-mood" => Ok(SortKey::LowestMood),
            _ => Err(MoodlogError::InvalidSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep entries passing the mood bucket AND the text search, in input order.
///
/// An empty `search` matches everything. Otherwise the term is matched as a
/// case-insensitive substring of the title or the content.
pub fn filter_entries<T>(entries: &[T], search: &str, bucket: MoodBucket) -> Vec<T>
where
    T: AsRef<JournalEntry> + Clone,
{
    let needle = search.to_lowercase();

    entries
        .iter()
        .filter(|item| {
            let entry = item.as_ref();
            bucket.matches(entry.mood) && matches_search(entry, &needle)
        })
        .cloned()
        .collect()
}

fn matches_search(entry: &JournalEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.title.to_lowercase().contains(needle)
        || entry.content.to_lowercase().contains(needle)
}

/// Return a sorted copy; ties keep their input order.
pub fn sort_entries<T>(entries: &[T], key: SortKey) -> Vec<T>
where
    T: AsRef<JournalEntry> + Clone,
{
    let mut sorted = entries.to_vec();

    // `sort_by` is stable
    sorted.sort_by(|a, b| {
        let (a, b) = (a.as_ref(), b.as_ref());
        match key {
            SortKey::Newest => b.date.cmp(&a.date),
            SortKey::Oldest => a.date.cmp(&b.date),
            SortKey::HighestMood => b.mood.cmp(&a.mood),
            SortKey::LowestMood => a.mood.cmp(&b.mood),
        }
    });

    sorted
}

/// Query state of the journal list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct JournalQuery {
    pub search: String,
    pub sort: SortKey,
    pub mood: MoodBucket,
}

impl JournalQuery {
    pub fn new(search: impl Into<String>, sort: SortKey, mood: MoodBucket) -> Self {
        JournalQuery {
            search: search.into(),
            sort,
            mood,
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        JournalQuery {
            search: search.into(),
            ..self
        }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        JournalQuery { sort, ..self }
    }

    pub fn with_mood(self, mood: MoodBucket) -> Self {
        JournalQuery { mood, ..self }
    }

    /// Clear-filters action: drops search and bucket, keeps the sort key
    pub fn cleared(&self) -> Self {
        JournalQuery {
            sort: self.sort,
            ..JournalQuery::default()
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || self.mood != MoodBucket::All
    }

    /// Filter, sort and classify `entries` into a view
    pub fn apply<'a>(&self, entries: &'a [JournalEntry], scale: &MoodScale) -> JournalView<'a> {
        let refs: Vec<&JournalEntry> = entries.iter().collect();
        let filtered = filter_entries(&refs, &self.search, self.mood);
        let sorted = sort_entries(&filtered, self.sort);

        let rows = sorted
            .into_iter()
            .map(|entry| EntryRow {
                class: scale.classify(entry.mood),
                entry,
            })
            .collect();

        JournalView {
            query: self.clone(),
            total: entries.len(),
            rows,
        }
    }
}

/// A list row: the entry and its mood classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow<'a> {
    pub entry: &'a JournalEntry,
    pub class: MoodClass,
}

/// Result of applying a query to an entry collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalView<'a> {
    pub query: JournalQuery,
    /// Size of the unfiltered collection
    pub total: usize,
    pub rows: Vec<EntryRow<'a>>,
}

impl JournalView<'_> {
    /// True when nothing matched; drives the "no entries match" state
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.entry.id).collect()
    }
}
