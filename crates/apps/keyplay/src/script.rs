//! Replay script format
//!
//! ```json
//! {
//!   "path": "/user/profile/edit",
//!   "settings_control": true,
//!   "steps": [ { "key": "g" }, { "wait_ms": 1200 }, { "key": "h", "target": "input" } ]
//! }
//! ```

use anyhow::{Context, Result};
use hotkeys::{KeyEvent, RecordingPage};
use serde::Deserialize;
use std::path::Path;

/// Simulated page plus the key presses to replay on it
#[derive(Debug, Deserialize)]
pub struct Script {
    /// Starting location path
    #[serde(default = "default_path")]
    pub path: String,
    /// Page has the search form
    #[serde(default)]
    pub search_input: bool,
    /// Page has the settings control
    #[serde(default)]
    pub settings_control: bool,
    /// Page registers a "new item" hook
    #[serde(default)]
    pub creation_hook: bool,
    pub steps: Vec<Step>,
}

fn default_path() -> String {
    "/".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Key(KeyEvent),
    Wait { wait_ms: u64 },
}

impl Step {
    pub fn describe(&self) -> String {
        match self {
            Step::Key(event) if event.target.is_text_entry() => {
                format!("key {:?} in {:?}", event.key.as_str(), event.target)
            }
            Step::Key(event) => format!("key {:?}", event.key.as_str()),
            Step::Wait { wait_ms } => format!("wait {}ms", wait_ms),
        }
    }
}

impl Script {
    /// Load a script from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
            .with_context(|| format!("Failed to load replay script: {}", path.display()))
    }

    /// Parse a script from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse replay script")
    }

    /// Build the simulated page this script starts on
    pub fn page(&self) -> RecordingPage {
        let mut page = RecordingPage::new(self.path.clone());
        if self.search_input {
            page = page.with_search_input();
        }
        if self.settings_control {
            page = page.with_settings_control();
        }
        page
    }
}
