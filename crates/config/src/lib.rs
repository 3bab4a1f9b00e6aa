//! Shared configuration directory for Estate front-end tooling
//!
//! Config files live in `$ESTATE_CONFIG_DIR` when that variable is set,
//! otherwise in `<platform config dir>/estate` (e.g. ~/.config/estate/).

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Environment variable that relocates the config directory
pub const CONFIG_DIR_ENV: &str = "ESTATE_CONFIG_DIR";

const APP_DIR: &str = "estate";

/// Get the Estate config directory
pub fn config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::config_dir().map(|p| p.join(APP_DIR)),
    }
}

/// Get the path to a config file within the Estate config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Check if a config file exists in the Estate config directory
pub fn config_exists(filename: &str) -> bool {
    config_path(filename).is_some_and(|p| p.is_file())
}

/// Load and parse a JSON config file from the Estate config directory
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T> {
    let path = config_path(filename).context("Could not determine config directory")?;
    load_json_file(&path)
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        #[serde(default)]
        count: u32,
    }

    #[test]
    fn test_config_path_is_inside_config_dir() {
        if let (Some(dir), Some(path)) = (config_dir(), config_path("hotkeys.json")) {
            assert!(path.starts_with(&dir));
            assert!(path.ends_with("hotkeys.json"));
        }
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{ "name": "estate" }"#).unwrap();

        let sample: Sample = load_json_file(&path).unwrap();
        assert_eq!(sample.name, "estate");
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn test_load_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json_file::<Sample>(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_json_file_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_json_file::<Sample>(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
