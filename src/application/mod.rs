//! Application layer - Use cases and orchestration

pub mod analyze_entry;
pub mod dashboard;
pub mod init;
pub mod list_entries;
pub mod show_entry;

pub use analyze_entry::{AnalyzeEntryService, EntryAnalysis};
pub use dashboard::{DashboardService, DashboardSummary};
pub use init::init_config;
pub use list_entries::{EntryListing, ListEntriesService, ListedEntry};
pub use show_entry::{EntryDetail, ShowEntryService};
