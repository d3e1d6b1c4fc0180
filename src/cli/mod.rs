//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_analysis, format_class, format_dashboard, format_detail, format_listing};
