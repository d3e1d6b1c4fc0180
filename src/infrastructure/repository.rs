//! Entry sources

use crate::domain::{sample_entries, JournalEntry};
use crate::error::{MoodlogError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an entries file
pub const ENTRIES_ENV: &str = "MOODLOG_ENTRIES";

/// Abstract source of journal entries
pub trait EntryRepository {
    /// All entries, in source order
    fn entries(&self) -> Result<Vec<JournalEntry>>;

    /// Find one entry by id
    fn find(&self, id: u32) -> Result<JournalEntry> {
        self.entries()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or(MoodlogError::EntryNotFound(id))
    }
}

/// Built-in sample entries
#[derive(Debug, Clone, Default)]
pub struct SeedRepository;

impl EntryRepository for SeedRepository {
    fn entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(sample_entries())
    }
}

#[derive(Debug, Deserialize)]
struct EntriesFile {
    #[serde(default)]
    entries: Vec<JournalEntry>,
}

/// Read-only TOML file of `[[entries]]` tables
#[derive(Debug, Clone)]
pub struct FileRepository {
    pub path: PathBuf,
}

impl FileRepository {
    pub fn new(path: PathBuf) -> Self {
        FileRepository { path }
    }

    fn parse(&self, contents: &str) -> Result<Vec<JournalEntry>> {
        let file: EntriesFile = toml::from_str(contents)?;
        validate(&file.entries)?;
        Ok(file.entries)
    }
}

impl EntryRepository for FileRepository {
    fn entries(&self) -> Result<Vec<JournalEntry>> {
        let contents = fs::read_to_string(&self.path)?;
        let entries = self.parse(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            count = entries.len(),
            "loaded entries file"
        );
        Ok(entries)
    }
}

fn validate(entries: &[JournalEntry]) -> Result<()> {
    let mut seen = HashSet::new();

    for entry in entries {
        if entry.mood > 10 {
            return Err(MoodlogError::InvalidEntry(format!(
                "entry {} has mood {} (expected 0-10)",
                entry.id, entry.mood
            )));
        }
        if !seen.insert(entry.id) {
            return Err(MoodlogError::InvalidEntry(format!(
                "duplicate entry id {}",
                entry.id
            )));
        }
    }

    Ok(())
}

/// Pick the entry source: explicit file, then `MOODLOG_ENTRIES`, then the
/// configured file, then the built-in samples.
pub fn open_repository(
    explicit: Option<&Path>,
    configured: Option<PathBuf>,
) -> Box<dyn EntryRepository> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(ENTRIES_ENV).ok().map(PathBuf::from))
        .or(configured);

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using entries file");
            Box::new(FileRepository::new(path))
        }
        None => Box::new(SeedRepository),
    }
}
