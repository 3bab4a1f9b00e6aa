//! In-memory page that records every side effect
//!
//! Used by tests and by the replay tool in place of a real browser page.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use super::{Focusable, PageHost};

/// Something the dispatcher did to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "value", rename_all = "snake_case")]
pub enum PageEffect {
    Redirected(String),
    Focused(&'static str),
    HelpShown(String),
}

type EffectLog = Rc<RefCell<Vec<PageEffect>>>;

/// Element handle handed out by [`RecordingPage`]
#[derive(Debug, Clone)]
pub struct RecordingElement {
    name: &'static str,
    effects: EffectLog,
}

impl RecordingElement {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Focusable for RecordingElement {
    fn focus(&self) {
        self.effects.borrow_mut().push(PageEffect::Focused(self.name));
    }
}

/// Simulated page with configurable focus targets
#[derive(Debug)]
pub struct RecordingPage {
    path: RefCell<String>,
    has_search_input: bool,
    has_settings_control: bool,
    effects: EffectLog,
}

impl RecordingPage {
    pub const SEARCH_INPUT: &'static str = "search-input";
    pub const SETTINGS_CONTROL: &'static str = "settings-control";

    /// Create an empty page at `path` with neither focus target present
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: RefCell::new(path.into()),
            has_search_input: false,
            has_settings_control: false,
            effects: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Builder method to add the search form
    pub fn with_search_input(mut self) -> Self {
        self.has_search_input = true;
        self
    }

    /// Builder method to add the settings control
    pub fn with_settings_control(mut self) -> Self {
        self.has_settings_control = true;
        self
    }

    /// All effects recorded so far, oldest first
    pub fn effects(&self) -> Vec<PageEffect> {
        self.effects.borrow().clone()
    }

    /// Remove and return recorded effects
    pub fn take_effects(&self) -> Vec<PageEffect> {
        std::mem::take(&mut *self.effects.borrow_mut())
    }

    /// Paths redirected to, oldest first
    pub fn redirects(&self) -> Vec<String> {
        self.effects
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PageEffect::Redirected(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    /// Move to another page without going through the dispatcher
    pub fn set_path(&self, path: impl Into<String>) {
        *self.path.borrow_mut() = path.into();
    }

    fn element(&self, name: &'static str) -> RecordingElement {
        RecordingElement {
            name,
            effects: Rc::clone(&self.effects),
        }
    }
}

impl PageHost for RecordingPage {
    type Element = RecordingElement;

    fn pathname(&self) -> String {
        self.path.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        self.set_path(path);
        self.effects
            .borrow_mut()
            .push(PageEffect::Redirected(path.to_string()));
    }

    fn search_input(&self) -> Option<RecordingElement> {
        self.has_search_input
            .then(|| self.element(Self::SEARCH_INPUT))
    }

    fn settings_control(&self) -> Option<RecordingElement> {
        self.has_settings_control
            .then(|| self.element(Self::SETTINGS_CONTROL))
    }

    fn show_help(&self, text: &str) {
        self.effects
            .borrow_mut()
            .push(PageEffect::HelpShown(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_updates_path() {
        let page = RecordingPage::new("/reports");
        page.redirect("/properties");
        assert_eq!(page.pathname(), "/properties");
        assert_eq!(page.redirects(), vec!["/properties".to_string()]);
    }

    #[test]
    fn test_missing_targets() {
        let page = RecordingPage::new("/");
        assert!(page.search_input().is_none());
        assert!(page.settings_control().is_none());
    }

    #[test]
    fn test_focus_is_recorded() {
        let page = RecordingPage::new("/").with_search_input();
        page.search_input().unwrap().focus();
        assert_eq!(
            page.take_effects(),
            vec![PageEffect::Focused(RecordingPage::SEARCH_INPUT)]
        );
        assert!(page.effects().is_empty());
    }
}
