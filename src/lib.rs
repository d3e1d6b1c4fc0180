//! moodlog - Mood journal browser
//!
//! Filters, sorts and classifies mood journal entries, and renders the
//! journal list, single entries and a dashboard summary on the terminal.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
