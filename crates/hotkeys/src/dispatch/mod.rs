//! Shortcut dispatch: turns key presses into page actions

mod dispatcher;
mod outcome;

pub use dispatcher::{ChordState, CreationHook, Dispatcher};
pub use outcome::{Action, Outcome};
