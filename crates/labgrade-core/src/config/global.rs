//! Config file locations (the user's `~/.config/labgrade/config.toml`)

use std::path::{Path, PathBuf};

use tracing::debug;

const CONFIG_DIR: &str = "labgrade";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "LABGRADE_CONFIG_DIR";

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "labgrade.toml";

fn config_path_from(env_dir: Option<PathBuf>, system_dir: Option<PathBuf>) -> Option<PathBuf> {
    env_dir
        .or_else(|| system_dir.map(|dir| dir.join(CONFIG_DIR)))
        .map(|dir| dir.join(CONFIG_FILE))
}

/// Path of the user-wide config file; `None` when the platform has no
/// config directory and `LABGRADE_CONFIG_DIR` is unset
pub fn global_config_path() -> Option<PathBuf> {
    config_path_from(
        std::env::var_os(CONFIG_DIR_ENV_VAR).map(PathBuf::from),
        dirs::config_dir(),
    )
}

/// First existing config file: `./labgrade.toml`, then the global one
pub fn discover(cwd: &Path) -> Option<PathBuf> {
    discover_with(cwd, global_config_path())
}

fn discover_with(cwd: &Path, global: Option<PathBuf>) -> Option<PathBuf> {
    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    match global {
        Some(global) if global.is_file() => Some(global),
        Some(_) => None,
        None => {
            debug!("no user config directory");
            None
        }
    }
}

/// Returns the source description for display purposes
pub fn source_display() -> String {
    if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
        "custom config directory".to_string()
    } else {
        format!("~/.config/{}/{}", CONFIG_DIR, CONFIG_FILE)
    }
}
