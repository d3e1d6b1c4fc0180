//! Infrastructure layer - Entry sources, configuration and analysis backends

pub mod analyzer;
pub mod config;
pub mod repository;

pub use analyzer::{MockSentimentAnalyzer, SentimentAnalyzer, SentimentReport};
pub use config::Config;
pub use repository::{open_repository, EntryRepository, FileRepository, SeedRepository};
