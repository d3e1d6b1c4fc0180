//! Configuration management

use crate::domain::{ColorToken, EmotionPalette, MoodBand, MoodScale, SortKey};
use crate::error::{MoodlogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the current directory
pub const CONFIG_FILE: &str = "moodlog.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MOODLOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entries file; relative paths resolve against the config file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<PathBuf>,
    pub default_sort: SortKey,
    /// Number of entries shown under "recent" on the dashboard
    pub recent_limit: usize,
    /// Extra or overriding emotion colors
    pub emotions: BTreeMap<String, ColorToken>,
    pub mood_scale: Vec<MoodBand>,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entries: None,
            default_sort: SortKey::default(),
            recent_limit: 3,
            emotions: BTreeMap::new(),
            mood_scale: MoodScale::default().bands().to_vec(),
            base_dir: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MoodlogError::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&contents).map_err(|e| {
            MoodlogError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        // Reject a bad table at load time rather than on first use
        config.mood_scale()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the active config.
    ///
    /// Order: explicit path, `MOODLOG_CONFIG`, `moodlog.toml` in `cwd`, defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        let local = cwd.join(CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    /// Save config as `moodlog.toml` in the given directory
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let path = dir.join(CONFIG_FILE);
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;

        Ok(path)
    }

    pub fn mood_scale(&self) -> Result<MoodScale> {
        MoodScale::new(self.mood_scale.clone())
    }

    pub fn emotion_palette(&self) -> EmotionPalette {
        let mut palette = EmotionPalette::default();
        for (name, color) in &self.emotions {
            palette.insert(name, *color);
        }
        palette
    }

    /// Configured entries file, resolved against the config file location
    pub fn entries_path(&self) -> Option<PathBuf> {
        let path = self.entries.as_ref()?;
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }
}
