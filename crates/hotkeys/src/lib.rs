//! Hotkeys crate - keyboard shortcuts for the Estate web front-end
//!
//! This crate provides the platform-independent shortcut logic:
//! - Key and event models
//! - The "g <key>" chord route table
//! - The shortcut dispatcher with its pending-chord state machine
//! - Host page and timer abstractions, with in-memory implementations
//! - Help dialog text
//! - Configuration loading
//!
//! It has no DOM dependency; `hotkeys-web` binds it to a browser page.

pub mod config;
pub mod dispatch;
pub mod help;
pub mod models;
pub mod page;
pub mod routes;
pub mod timer;

pub use self::config::{ConfigError, HotkeysConfig};
pub use dispatch::{Action, ChordState, CreationHook, Dispatcher, Outcome};
pub use help::{ShortcutCategory, help_text, shortcuts_help};
pub use models::{Key, KeyEvent, TargetKind};
pub use page::{Focusable, PageEffect, PageHost, RecordingElement, RecordingPage};
pub use routes::{Route, RouteTable};
pub use timer::{ChordTimer, ManualTimer, TimerId};
