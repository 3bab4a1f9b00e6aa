//! Domain models for keyboard input

mod event;
mod key;

pub use event::{KeyEvent, TargetKind};
pub use key::Key;
