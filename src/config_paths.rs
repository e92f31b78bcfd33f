//! Centralized configuration paths for syntax-inspector
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/syntax-inspector/`
//! - Windows: `%APPDATA%\syntax-inspector\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "syntax-inspector";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "inspector.log";

/// Base config directory for syntax-inspector
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/syntax-inspector`
///   - Else: `~/.config/syntax-inspector`
///
/// Windows:
///   - `%APPDATA%\syntax-inspector`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/syntax-inspector/inspector.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("inspector.yaml"))
}

/// `~/.config/syntax-inspector/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    ensure_dir(&logs)?;
    Ok(logs)
}
