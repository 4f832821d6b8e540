/// Persisted gallery controls
///
/// The slider/checkbox values survive restarts; nothing about the browsed
/// folders or their contents is ever written to disk. Stored as JSON in
/// the user's config directory:
/// - Linux: ~/.config/mini-gallery/settings.json
/// - macOS: ~/Library/Application Support/mini-gallery/settings.json
/// - Windows: %APPDATA%\mini-gallery\settings.json
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Allowed range for the column count slider.
pub const NB_COLUMNS_RANGE: std::ops::RangeInclusive<u32> = 1..=10;
/// Allowed range for the images-per-page slider.
pub const MAX_PER_PAGE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Errors while saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not write settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// The user-tunable gallery controls.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Number of grid columns (1 to 10)
    pub nb_columns: u32,
    /// Maximum images shown on one page (1 to 100)
    pub max_per_page: u32,
    /// Whether folder discovery descends into subfolders
    pub recursive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nb_columns: 3,
            max_per_page: 12,
            recursive: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults on any problem
    /// (first run, unreadable file, stale format). Loaded values are
    /// clamped back into the slider ranges in case the file was edited
    /// by hand.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };

        let loaded = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str::<Self>(&text).ok())
            .unwrap_or_default();

        loaded.clamped()
    }

    /// Write the settings file, creating the config directory if needed.
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = settings_path() else {
            // No config directory on this system; skip persistence.
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Copy with every field forced into its documented range.
    pub fn clamped(self) -> Self {
        Self {
            nb_columns: self
                .nb_columns
                .clamp(*NB_COLUMNS_RANGE.start(), *NB_COLUMNS_RANGE.end()),
            max_per_page: self
                .max_per_page
                .clamp(*MAX_PER_PAGE_RANGE.start(), *MAX_PER_PAGE_RANGE.end()),
            recursive: self.recursive,
        }
    }
}

/// Where the settings file lives, if the platform has a config directory.
fn settings_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("mini-gallery");
    path.push("settings.json");
    Some(path)
}
