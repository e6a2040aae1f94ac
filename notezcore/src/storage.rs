//! Storage utilities for Notez
//!
//! JSON preference files under the platform config directory.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for a Notez app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load a JSON value from disk
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save a JSON value to disk, creating parent directories as needed
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let path = std::env::temp_dir().join(format!("notez_storage_test_{}.json", std::process::id()));
        let value = vec!["E".to_string(), "A".to_string(), "D".to_string()];
        save_json(&path, &value).unwrap();
        let loaded: Vec<String> = load_json(&path).unwrap();
        assert_eq!(loaded, value);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("notez_storage_test_does_not_exist.json");
        let result: Result<Vec<String>> = load_json(&path);
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn test_config_dir_is_not_empty() {
        let dir = config_dir("notez");
        assert!(!dir.as_os_str().is_empty());
    }
}
