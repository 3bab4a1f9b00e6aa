//! Dispatcher configuration
//!
//! Loaded from (in order of priority):
//! 1. An explicit JSON file
//! 2. `hotkeys.json` in the Estate config directory
//! 3. Built-in defaults
//!
//! `ESTATE_HOTKEYS_CHORD_TIMEOUT_MS` overrides the chord timeout afterwards.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use crate::models::Key;
use crate::routes::RouteTable;

/// Config filename in the Estate config directory
pub const CONFIG_FILE: &str = "hotkeys.json";

/// Environment variable overriding [`HotkeysConfig::chord_timeout_ms`]
pub const CHORD_TIMEOUT_ENV: &str = "ESTATE_HOTKEYS_CHORD_TIMEOUT_MS";

/// Invalid configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chord timeout must be greater than zero")]
    ZeroTimeout,

    #[error("route key {0:?} is bound more than once")]
    DuplicateRouteKey(String),

    #[error("route key {0:?} is the chord leader and can never complete a chord")]
    LeaderRouteKey(String),

    #[error("route for key {key:?} has path {path:?}, expected an absolute path")]
    RelativeRoutePath { key: String, path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeysConfig {
    /// How long a "g" press waits for its second key
    pub chord_timeout_ms: u64,
    /// "g <key>" navigation targets
    pub routes: RouteTable,
    /// CSS selector of the search box focused by "/"
    pub search_input_selector: String,
    /// Element id of the control focused by "s"
    pub settings_control_id: String,
    /// "s" only applies on pages under this path
    pub profile_path_prefix: String,
    /// Drop the pending chord when its second key matches no route.
    /// Off by default: the chord stays pending until it times out.
    pub cancel_chord_on_unmapped_key: bool,
}

impl Default for HotkeysConfig {
    fn default() -> Self {
        Self {
            chord_timeout_ms: 1000,
            routes: RouteTable::default(),
            search_input_selector: "form.search input[name='q']".to_string(),
            settings_control_id: "settings-theme".to_string(),
            profile_path_prefix: "/user/profile".to_string(),
            cancel_chord_on_unmapped_key: false,
        }
    }
}

impl HotkeysConfig {
    /// Load configuration using the priority order described above
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(path) => Self::from_file(path)?,
            None if config::config_exists(CONFIG_FILE) => {
                debug!("Loading hotkeys config from {}", CONFIG_FILE);
                config::load_json::<Self>(CONFIG_FILE)?
            }
            None => Self::default(),
        };

        if let Ok(raw) = std::env::var(CHORD_TIMEOUT_ENV) {
            cfg.chord_timeout_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a number: {:?}", CHORD_TIMEOUT_ENV, raw))?;
            info!("Chord timeout overridden to {}ms", cfg.chord_timeout_ms);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let cfg: Self = config::load_json_file(path)?;
        cfg.validate()
            .with_context(|| format!("Invalid hotkeys config: {}", path.display()))?;
        Ok(cfg)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json).context("Failed to parse hotkeys config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn chord_timeout(&self) -> Duration {
        Duration::from_millis(self.chord_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chord_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let mut seen = HashSet::new();
        for route in self.routes.iter() {
            let key = route.key.as_str();
            if key == Key::CHORD_LEADER {
                return Err(ConfigError::LeaderRouteKey(key.to_string()));
            }
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateRouteKey(key.to_string()));
            }
            if !route.path.starts_with('/') {
                return Err(ConfigError::RelativeRoutePath {
                    key: key.to_string(),
                    path: route.path.clone(),
                });
            }
        }
        Ok(())
    }
}
