//! Per-user directories.
//!
//! - settings: `<cache dir>/.lonescode/setting.json`
//! - logs: `<data dir>/lonescode/logs`

use std::io;
use std::path::PathBuf;

const APP_NAME: &str = "lonescode";
const LOG_DIR: &str = "logs";

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn home_join(rel: &str) -> Option<PathBuf> {
    env_dir("HOME").map(|home| home.join(rel))
}

/// XDG cache home on Linux, `~/Library/Caches` on macOS, `%LOCALAPPDATA%` on Windows.
pub fn get_cache_dir() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        home_join("Library/Caches")
    } else if cfg!(target_os = "windows") {
        env_dir("LOCALAPPDATA").or_else(|| env_dir("APPDATA"))
    } else {
        env_dir("XDG_CACHE_HOME").or_else(|| home_join(".cache"))
    }
}

fn get_app_data_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        home_join("Library/Application Support")
    } else if cfg!(target_os = "windows") {
        env_dir("APPDATA")
    } else {
        env_dir("XDG_DATA_HOME").or_else(|| home_join(".local/share"))
    };
    base.map(|dir| dir.join(APP_NAME))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Cannot determine log directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
