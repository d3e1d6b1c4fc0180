//! Error types for moodlog

use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("Invalid mood filter: {0}")]
    InvalidMoodBucket(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(u32),

    #[error("Empty entry: {0}")]
    EmptyEntry(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::Config(_) => 2,
            MoodlogError::InvalidSortKey(_) | MoodlogError::InvalidMoodBucket(_) => 3,
            MoodlogError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::InvalidSortKey(key) => {
                format!(
                    "Invalid sort key: '{}'\n\n\
                    Valid sort keys:\n\
                    • newest, oldest\n\
                    • highest-mood, lowest-mood\n\n\
                    Example:\n\
                    moodlog list --sort lowest-mood",
                    key
                )
            }
            MoodlogError::InvalidMoodBucket(bucket) => {
                format!(
                    "Invalid mood filter: '{}'\n\n\
                    Valid mood filters:\n\
                    • all\n\
                    • very-happy (8), happy (6), neutral (4), sad (2), very-sad (0)\n\n\
                    Examples:\n\
                    moodlog list --mood happy\n\
                    moodlog list --mood 4",
                    bucket
                )
            }
            MoodlogError::EntryNotFound(id) => {
                format!(
                    "No journal entry with id {}\n\n\
                    Suggestions:\n\
                    • Use 'moodlog list' to see available entries\n\
                    • Check the --entries file or MOODLOG_ENTRIES if you use one",
                    id
                )
            }
            MoodlogError::EmptyEntry(what) => {
                format!(
                    "Empty entry: {}\n\n\
                    Please write something before analyzing.",
                    what
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("already exists") {
                    format!(
                        "{}\n\n\
                        Remove the existing file or edit it directly.",
                        msg
                    )
                } else {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Check --config or MOODLOG_CONFIG points to a readable TOML file\n\
                        • Run 'moodlog init' to write a default moodlog.toml",
                        msg
                    )
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
