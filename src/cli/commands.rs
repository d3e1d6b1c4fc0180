//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Mood journal browser", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MOODLOG_CONFIG or ./moodlog.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List journal entries
    List {
        /// Case-insensitive text matched against title and content
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort order (newest, oldest, highest-mood, lowest-mood)
        #[arg(long)]
        sort: Option<String>,

        /// Mood filter (all, very-happy, happy, neutral, sad, very-sad or 8/6/4/2/0)
        #[arg(short, long, default_value = "all")]
        mood: String,

        /// Entries file (default: $MOODLOG_ENTRIES, config, built-in samples)
        #[arg(long, value_name = "FILE")]
        entries: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one entry
    Show {
        id: u32,

        #[arg(long, value_name = "FILE")]
        entries: Option<PathBuf>,
    },

    /// Mood overview
    Dashboard {
        #[arg(long, value_name = "FILE")]
        entries: Option<PathBuf>,

        /// Number of recent entries to show
        #[arg(long)]
        recent: Option<usize>,
    },

    /// Classify a mood score
    Classify {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=10))]
        mood: u8,
    },

    /// Look up the color of an emotion
    Emotion { name: String },

    /// Analyze a draft entry
    Analyze {
        /// Entry text
        text: String,
    },

    /// Write a default moodlog.toml
    Init {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
