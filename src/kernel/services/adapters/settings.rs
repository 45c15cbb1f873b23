use crate::kernel::services::ports::config::WidgetConfig;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

const SETTINGS_DIR: &str = ".typeahead";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

pub const CONFIG_ENV: &str = "TYPEAHEAD_CONFIG";

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Invalid settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// `$TYPEAHEAD_CONFIG` when set, else `<cache dir>/.typeahead/settings.json`.
pub fn settings_path() -> Option<PathBuf> {
    resolve_settings_path(std::env::var_os(CONFIG_ENV), get_cache_dir())
}

fn resolve_settings_path(env: Option<OsString>, cache_dir: Option<PathBuf>) -> Option<PathBuf> {
    match env {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => cache_dir.map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE)),
    }
}

/// A missing file yields the defaults; an unreadable or malformed one is an error.
pub fn load_settings(path: &Path) -> Result<WidgetConfig, SettingsError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(WidgetConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&data)?)
}

/// Write the default settings to `path` unless a file is already there.
pub fn ensure_settings_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&WidgetConfig::default())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_cache_dir()
        .map(|dir| dir.join(SETTINGS_DIR).join(LOG_DIR))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Cannot determine cache directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
