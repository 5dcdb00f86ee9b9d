//! Filesystem location of the persisted user configuration.

use std::path::PathBuf;

/// User config file.
///
/// Windows: `%APPDATA%/cmake-new/cmake-new.json`
/// Elsewhere: `~/.config/cmake-new.json`
pub fn user_config_path() -> PathBuf {
    if cfg!(windows) {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cmake-new")
            .join("cmake-new.json")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("cmake-new.json")
    }
}
