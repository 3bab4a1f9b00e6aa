//! Key-sequence interpreter
//!
//! Per event, in order:
//! 1. Events from text-entry controls are skipped untouched.
//! 2. "g" (re)starts a chord and arms the expiry timer.
//! 3. While a chord is pending, a routed second key redirects.
//! 4. Otherwise single-key shortcuts: "/", "n", "s", "?".

use log::{debug, info, trace, warn};
use std::time::Duration;

use super::{Action, Outcome};
use crate::config::HotkeysConfig;
use crate::help::help_text;
use crate::models::{Key, KeyEvent};
use crate::page::{Focusable, PageHost};
use crate::timer::{ChordTimer, ManualTimer, TimerId};

/// Page-supplied callback that opens the "new item" form
pub type CreationHook = Box<dyn FnMut()>;

/// Pending chord state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChordState {
    #[default]
    Idle,
    /// First key seen; `timer` clears the chord when it fires
    AwaitingSecondKey { leader: Key, timer: TimerId },
}

/// Shortcut dispatcher for one page
pub struct Dispatcher<H: PageHost, T: ChordTimer> {
    host: H,
    timer: T,
    config: HotkeysConfig,
    help: String,
    creation_hook: Option<CreationHook>,
    state: ChordState,
}

impl<H: PageHost, T: ChordTimer> Dispatcher<H, T> {
    /// Create a dispatcher without a creation hook
    pub fn new(host: H, timer: T, config: HotkeysConfig) -> Self {
        let help = help_text(&config.routes);
        Self {
            host,
            timer,
            config,
            help,
            creation_hook: None,
            state: ChordState::Idle,
        }
    }

    /// Builder method to inject the creation hook
    pub fn with_creation_hook(mut self, hook: impl FnMut() + 'static) -> Self {
        self.creation_hook = Some(Box::new(hook));
        self
    }

    /// Replace or remove the creation hook
    pub fn set_creation_hook(&mut self, hook: Option<CreationHook>) {
        self.creation_hook = hook;
    }

    pub fn state(&self) -> &ChordState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn config(&self) -> &HotkeysConfig {
        &self.config
    }

    /// Text shown by "?"
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Handle one key press
    pub fn handle_key(&mut self, event: &KeyEvent) -> Outcome {
        for id in self.timer.take_missed() {
            self.expire(id);
        }

        if event.target.is_text_entry() {
            trace!("Ignoring {:?} typed into {:?}", event.key.as_str(), event.target);
            return Outcome::Skipped;
        }

        let key = &event.key;
        if key.is_chord_leader() {
            self.start_chord(key.clone());
            return Outcome::handled(Action::ChordStarted);
        }

        if matches!(self.state, ChordState::AwaitingSecondKey { .. }) {
            if let Some(route) = self.config.routes.lookup(key) {
                let path = route.path.clone();
                self.clear_chord();
                info!("Chord {} {} -> {}", Key::CHORD_LEADER, key, path);
                self.host.redirect(&path);
                return Outcome::handled(Action::Navigated { path });
            }
            if self.config.cancel_chord_on_unmapped_key {
                debug!("Chord cancelled by unmapped key {:?}", key.as_str());
                self.clear_chord();
            }
        }

        self.dispatch_single(key)
    }

    /// Timer callback. Returns true if it cleared the pending chord.
    ///
    /// Ids other than the currently armed timer are stale and ignored.
    pub fn expire(&mut self, id: TimerId) -> bool {
        match self.state {
            ChordState::AwaitingSecondKey { timer, .. } if timer == id => {
                debug!("Chord expired");
                self.state = ChordState::Idle;
                true
            }
            _ => {
                trace!("Ignoring stale chord timer {:?}", id);
                false
            }
        }
    }

    fn start_chord(&mut self, leader: Key) {
        if self.clear_chord() {
            debug!("Chord restarted");
        }
        // Without an expiry timer the chord could outlive its window
        let Some(timer) = self.timer.arm(self.config.chord_timeout()) else {
            warn!("Chord timer could not be scheduled, chord dropped");
            return;
        };
        debug!(
            "Chord started, waiting {}ms for second key",
            self.config.chord_timeout_ms
        );
        self.state = ChordState::AwaitingSecondKey { leader, timer };
    }

    /// Drop the pending chord and cancel its timer. Returns true if one was pending.
    fn clear_chord(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            ChordState::AwaitingSecondKey { timer, .. } => {
                self.timer.cancel(timer);
                true
            }
            ChordState::Idle => false,
        }
    }

    fn dispatch_single(&mut self, key: &Key) -> Outcome {
        match key.as_str() {
            Key::FOCUS_SEARCH => match self.host.search_input() {
                Some(input) => {
                    info!("Focusing search input");
                    input.focus();
                    Outcome::handled(Action::FocusSearch { found: true })
                }
                None => Outcome::Handled {
                    action: Action::FocusSearch { found: false },
                    prevent_default: false,
                },
            },
            Key::NEW_ITEM => {
                let hook_invoked = match self.creation_hook.as_mut() {
                    Some(hook) => {
                        info!("Opening new item form");
                        hook();
                        true
                    }
                    None => false,
                };
                Outcome::handled(Action::NewItem { hook_invoked })
            }
            Key::SETTINGS => {
                if !self
                    .host
                    .pathname()
                    .starts_with(&self.config.profile_path_prefix)
                {
                    return Outcome::NoMatch;
                }
                let found = match self.host.settings_control() {
                    Some(control) => {
                        info!("Focusing settings control");
                        control.focus();
                        true
                    }
                    None => false,
                };
                Outcome::handled(Action::FocusSettings { found })
            }
            Key::HELP => {
                self.host.show_help(&self.help);
                Outcome::handled(Action::HelpShown)
            }
            _ => Outcome::NoMatch,
        }
    }
}

impl<H: PageHost> Dispatcher<H, ManualTimer> {
    /// Move the virtual clock forward, delivering due timers
    pub fn advance(&mut self, by: Duration) {
        for id in self.timer.advance(by) {
            self.expire(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{PageEffect, RecordingPage};
    use std::cell::Cell;
    use std::rc::Rc;

    fn dispatcher(page: RecordingPage) -> Dispatcher<RecordingPage, ManualTimer> {
        Dispatcher::new(page, ManualTimer::new(), HotkeysConfig::default())
    }

    fn press(d: &mut Dispatcher<RecordingPage, ManualTimer>, key: &str) -> Outcome {
        d.handle_key(&KeyEvent::new(key))
    }

    #[test]
    fn test_leader_starts_chord() {
        let mut d = dispatcher(RecordingPage::new("/"));
        let outcome = press(&mut d, "g");

        assert_eq!(outcome, Outcome::handled(Action::ChordStarted));
        assert!(outcome.prevents_default());
        assert!(matches!(
            d.state(),
            ChordState::AwaitingSecondKey { leader, .. } if leader == "g"
        ));
        assert_eq!(d.timer().pending(), 1);
    }

    #[test]
    fn test_completed_chord_clears_state_and_timer() {
        let mut d = dispatcher(RecordingPage::new("/reports"));
        press(&mut d, "g");
        let outcome = press(&mut d, "h");

        assert_eq!(
            outcome,
            Outcome::handled(Action::Navigated {
                path: "/".to_string()
            })
        );
        assert_eq!(d.state(), &ChordState::Idle);
        assert_eq!(d.timer().pending(), 0);
        assert_eq!(d.host().redirects(), vec!["/".to_string()]);
    }

    #[test]
    fn test_expire_ignores_stale_timer() {
        let mut d = dispatcher(RecordingPage::new("/"));
        press(&mut d, "g");
        let ChordState::AwaitingSecondKey { timer: first, .. } = d.state().clone() else {
            panic!("chord should be pending");
        };
        press(&mut d, "g");

        assert!(!d.expire(first));
        assert_ne!(d.state(), &ChordState::Idle);
    }

    #[test]
    fn test_slash_without_search_input_does_not_prevent_default() {
        let mut d = dispatcher(RecordingPage::new("/"));
        let outcome = press(&mut d, "/");

        assert_eq!(outcome.action(), Some(&Action::FocusSearch { found: false }));
        assert!(!outcome.prevents_default());
        assert!(d.host().effects().is_empty());
    }

    #[test]
    fn test_new_item_hook_can_be_replaced() {
        let calls = Rc::new(Cell::new(0));
        let mut d = dispatcher(RecordingPage::new("/"));

        let counter = Rc::clone(&calls);
        d.set_creation_hook(Some(Box::new(move || counter.set(counter.get() + 1))));
        press(&mut d, "n");
        d.set_creation_hook(None);
        let outcome = press(&mut d, "n");

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.action(), Some(&Action::NewItem { hook_invoked: false }));
        assert!(outcome.prevents_default());
    }

    #[test]
    fn test_settings_without_control_still_prevents_default() {
        let mut d = dispatcher(RecordingPage::new("/user/profile"));
        let outcome = press(&mut d, "s");

        assert_eq!(outcome.action(), Some(&Action::FocusSettings { found: false }));
        assert!(outcome.prevents_default());
    }

    #[test]
    fn test_help_uses_configured_routes() {
        let mut d = dispatcher(RecordingPage::new("/"));
        press(&mut d, "?");

        assert_eq!(
            d.host().effects(),
            vec![PageEffect::HelpShown(d.help().to_string())]
        );
        assert!(d.help().starts_with("Горячие клавиши:"));
    }

    #[test]
    fn test_unbound_key_is_no_match() {
        let mut d = dispatcher(RecordingPage::new("/"));
        assert_eq!(press(&mut d, "x"), Outcome::NoMatch);
        assert_eq!(press(&mut d, "Enter"), Outcome::NoMatch);
        assert!(!press(&mut d, "h").prevents_default());
    }
}
