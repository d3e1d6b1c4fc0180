//! Write a default config file

use crate::error::{MoodlogError, Result};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use std::path::{Path, PathBuf};

/// Write a default `moodlog.toml` into `dir`, refusing to overwrite.
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(CONFIG_FILE);
    if target.exists() {
        return Err(MoodlogError::Config(format!(
            "{} already exists",
            target.display()
        )));
    }

    let path = Config::default().save_to_dir(dir)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(path)
}
