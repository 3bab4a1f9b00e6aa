//! Key identifier as reported by the host page

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pressed key, e.g. `"g"`, `"/"`, `"?"` or `"Enter"`
///
/// Comparison is exact: `"G"` (shift+g) is a different key than `"g"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

impl Key {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Keys with a fixed meaning
    pub const CHORD_LEADER: &'static str = "g";
    pub const FOCUS_SEARCH: &'static str = "/";
    pub const NEW_ITEM: &'static str = "n";
    pub const SETTINGS: &'static str = "s";
    pub const HELP: &'static str = "?";

    /// Whether this key starts a two-key chord
    pub fn is_chord_leader(&self) -> bool {
        self.0 == Self::CHORD_LEADER
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
