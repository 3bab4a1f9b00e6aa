//! Result of handling one key event

use serde::Serialize;

/// What a shortcut did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// "g" pressed; waiting for the second key
    ChordStarted,
    /// Chord completed; page redirected to `path`
    Navigated { path: String },
    /// "/" pressed
    FocusSearch { found: bool },
    /// "n" pressed
    NewItem { hook_invoked: bool },
    /// "s" pressed on a profile page
    FocusSettings { found: bool },
    /// "?" pressed
    HelpShown,
}

/// How the dispatcher treated a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Typed into a text-entry control; left alone
    Skipped,
    /// No shortcut bound to this key here
    NoMatch,
    Handled {
        action: Action,
        prevent_default: bool,
    },
}

impl Outcome {
    pub(crate) fn handled(action: Action) -> Self {
        Self::Handled {
            action,
            prevent_default: true,
        }
    }

    /// Whether the host should suppress the browser's default behavior
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            Self::Handled {
                prevent_default: true,
                ..
            }
        )
    }

    pub fn action(&self) -> Option<&Action> {
        match self {
            Self::Handled { action, .. } => Some(action),
            _ => None,
        }
    }
}
