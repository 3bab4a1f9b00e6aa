//! Host page abstraction
//!
//! The dispatcher never touches the DOM directly. Everything it needs from
//! the page (current path, redirects, the two focus targets, the help dialog)
//! goes through [`PageHost`], so tests and the replay tool can substitute
//! [`RecordingPage`].

mod recording;

pub use recording::{PageEffect, RecordingElement, RecordingPage};

/// An element that can receive input focus
pub trait Focusable {
    fn focus(&self);
}

/// Page capabilities used by the dispatcher
///
/// Methods take `&self`: hosts are single-threaded and use interior
/// mutability where they need it, like the DOM itself.
pub trait PageHost {
    type Element: Focusable;

    /// Current location path, e.g. `/user/profile/edit`
    fn pathname(&self) -> String;

    /// Full-page redirect, replacing the current location
    fn redirect(&self, path: &str);

    /// The search box (`q` field of the search form), if on this page
    fn search_input(&self) -> Option<Self::Element>;

    /// The profile settings control, if on this page
    fn settings_control(&self) -> Option<Self::Element>;

    /// Show a blocking modal with `text`
    fn show_help(&self, text: &str);
}
