//! Centralized paths in the Rime user directory
//!
//! The user directory is:
//! - `$RIME_USER_DIR` if set
//! - macOS: `~/Library/Rime/`
//! - elsewhere: `<config dir>/rime/` (e.g. `~/.config/rime/`)
//!
//! This module is the single source of truth for these paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Overrides the Rime user directory
pub const USER_DIR_ENV: &str = "RIME_USER_DIR";

const SETTINGS_FILE: &str = "squirrel.yaml";
const LOG_FILE_PREFIX: &str = "squirrel-keys.log";

/// Base directory for Rime user data
pub fn user_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(USER_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    #[cfg(target_os = "macos")]
    {
        dirs::home_dir().map(|home| home.join("Library").join("Rime"))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir().map(|config| config.join("rime"))
    }
}

/// `<user dir>/squirrel.yaml`
pub fn settings_file() -> Option<PathBuf> {
    user_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// `<user dir>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    user_dir().map(|dir| dir.join("logs"))
}

/// File name prefix of the daily log files
pub fn log_file_prefix() -> &'static str {
    LOG_FILE_PREFIX
}

/// The most recent log file in `<user dir>/logs/` (e.g. `squirrel-keys.log.2026-10-19`)
///
/// Logging rotates daily; `YYYY-MM-DD` suffixes sort by name.
pub fn log_file() -> Option<PathBuf> {
    let logs_dir = logs_dir()?;

    let newest = fs::read_dir(&logs_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
        })
        .max();

    newest.or_else(|| Some(logs_dir.join(LOG_FILE_PREFIX)))
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

/// Ensure the user dir exists, returning it
pub fn ensure_user_dir() -> std::io::Result<PathBuf> {
    let dir = user_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no Rime user directory available")
    })?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure the logs dir exists, returning it
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let logs = ensure_user_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_user_dir() {
        let (Some(dir), Some(settings), Some(logs)) = (user_dir(), settings_file(), logs_dir())
        else {
            return;
        };
        assert_eq!(settings, dir.join("squirrel.yaml"));
        assert_eq!(logs, dir.join("logs"));
    }

    #[test]
    fn test_log_file_prefix() {
        assert_eq!(log_file_prefix(), "squirrel-keys.log");
        if let Some(path) = log_file() {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap();
            assert!(name.starts_with("squirrel-keys.log"));
        }
    }
}
