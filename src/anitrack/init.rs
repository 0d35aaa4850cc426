use crate::api::{CmdMessage, TrackerApi};
use crate::commands::config::CORRUPT_CONFIG_WARNING;
use crate::config::TrackerConfig;
use crate::error::{Result, TrackerError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the tracker home directory (config and default data file location).
pub const HOME_ENV: &str = "ANITRACK_HOME";

pub struct TrackerContext {
    pub api: TrackerApi<FileStore>,
    /// Problems met while setting up, for the front end to show
    pub messages: Vec<CmdMessage>,
}

/// `$ANITRACK_HOME` when set and non-empty, the platform data dir otherwise.
pub fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "anitrack", "anitrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine data dir".to_string()))
}

/// Builds the API for `home`. `data_file` replaces the configured data file
/// for this session only. The library is not loaded yet. A corrupt config
/// file is replaced by the defaults with a warning.
pub fn initialize(home: PathBuf, data_file: Option<PathBuf>) -> Result<TrackerContext> {
    let mut messages = Vec::new();
    let (config, problem) = TrackerConfig::load_or_default(&home);
    if let Some(e) = problem {
        warn!(error = %e, "config file unreadable");
        messages.push(CmdMessage::warning(CORRUPT_CONFIG_WARNING));
    }
    let data_path = match data_file {
        Some(path) => path,
        None => config.data_path(&home),
    };
    debug!(home = %home.display(), data = %data_path.display(), "initializing tracker");

    let store = FileStore::new(data_path);
    let api = TrackerApi::new(store, config, home);
    Ok(TrackerContext { api, messages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn uses_configured_data_file() {
        let temp = tempdir().unwrap();
        let mut config = TrackerConfig::default();
        config.set("data-file", "shows.json").unwrap();
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path().to_path_buf(), None).unwrap();
        assert_eq!(
            ctx.api.store().path(),
            temp.path().join("shows.json").as_path()
        );
    }

    #[test]
    fn explicit_data_file_wins() {
        let temp = tempdir().unwrap();
        let other = temp.path().join("other.json");

        let ctx = initialize(temp.path().to_path_buf(), Some(other.clone())).unwrap();
        assert_eq!(ctx.api.store().path(), other.as_path());
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.json"), "nope").unwrap();

        let ctx = initialize(temp.path().to_path_buf(), None).unwrap();
        assert_eq!(
            ctx.api.store().path(),
            temp.path().join("anime_data.json").as_path()
        );
        assert_eq!(ctx.messages.len(), 1);
        assert_eq!(ctx.messages[0].content, CORRUPT_CONFIG_WARNING);
    }

    #[test]
    fn clean_setup_has_no_messages() {
        let temp = tempdir().unwrap();
        let ctx = initialize(temp.path().to_path_buf(), None).unwrap();
        assert!(ctx.messages.is_empty());
    }
}
