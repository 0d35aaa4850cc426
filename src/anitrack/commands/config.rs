use crate::commands::{CmdMessage, CmdResult};
use crate::config::TrackerConfig;
use crate::error::Result;
use std::path::Path;
use tracing::warn;

pub const CORRUPT_CONFIG_WARNING: &str = "Config file corrupted, using defaults.";

/// Loads the config, noting a warning on `result` when the file had to be
/// replaced by defaults.
fn load(home: &Path, result: &mut CmdResult) -> TrackerConfig {
    let (config, problem) = TrackerConfig::load_or_default(home);
    if let Some(e) = problem {
        warn!(error = %e, "config file unreadable");
        result.add_message(CmdMessage::warning(CORRUPT_CONFIG_WARNING));
    }
    config
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(home: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let mut result = CmdResult::default();
            let config = load(home, &mut result);
            Ok(result.with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            let config = load(home, &mut result);
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            let mut config = load(home, &mut result);
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(home)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = result.with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
