//! User settings persisted in the OS config directory.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milestones due within this many days are flagged as due soon.
    pub due_soon_days: i64,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Last project file opened or saved, reopened on startup.
    pub recent_project: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            due_soon_days: 7,
            log_filter: "info".into(),
            recent_project: None,
        }
    }
}

/// Loads and saves [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Settings file under the platform config dir, or the working directory
    /// when no home directory can be resolved.
    pub fn discover() -> Self {
        let dir = directories::ProjectDirs::from("", "", "SiteProgress")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::at(dir.join("settings.json"))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }

    /// Missing or unreadable settings fall back to defaults.
    pub fn load(&self) -> Settings {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed settings");
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        std::fs::create_dir_all(self.dir())?;
        std::fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("nested").join("settings.json"));
        let settings = Settings {
            due_soon_days: 14,
            log_filter: "debug".into(),
            recent_project: Some(PathBuf::from("/tmp/depot.progress.json")),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "due_soon_days": 3 }"#).unwrap();
        let loaded = SettingsStore::at(&path).load();
        assert_eq!(loaded.due_soon_days, 3);
        assert_eq!(loaded.log_filter, "info");
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "][").unwrap();
        assert_eq!(SettingsStore::at(&path).load(), Settings::default());
    }
}
