//! Chord timers backed by `window.setTimeout`

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use hotkeys::{ChordTimer, Dispatcher, TimerId};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::page::DomPage;

/// Dispatcher as installed on a browser page
pub type WebDispatcher = Dispatcher<DomPage, WebTimer>;

struct ArmedTimer {
    id: TimerId,
    handle: i32,
    fired: Rc<Cell<bool>>,
    // Dropping the closure invalidates the JS callback, so it lives until
    // the timer fires (and the next arm prunes it) or is cancelled.
    _callback: Closure<dyn FnMut()>,
}

/// Timer that calls back into the dispatcher it belongs to
pub struct WebTimer {
    window: Window,
    dispatcher: Weak<RefCell<WebDispatcher>>,
    next_id: u64,
    armed: Vec<ArmedTimer>,
    /// Firings that found the dispatcher busy (inside a hook or `alert`)
    missed: Rc<RefCell<Vec<TimerId>>>,
}

impl WebTimer {
    pub fn new(window: Window, dispatcher: Weak<RefCell<WebDispatcher>>) -> Self {
        Self {
            window,
            dispatcher,
            next_id: 0,
            armed: Vec::new(),
            missed: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ChordTimer for WebTimer {
    fn arm(&mut self, delay: Duration) -> Option<TimerId> {
        self.armed.retain(|timer| !timer.fired.get());

        self.next_id += 1;
        let id = TimerId(self.next_id);
        let fired = Rc::new(Cell::new(false));

        let dispatcher = self.dispatcher.clone();
        let fired_flag = Rc::clone(&fired);
        let missed = Rc::clone(&self.missed);
        let callback = Closure::<dyn FnMut()>::new(move || {
            fired_flag.set(true);
            let Some(dispatcher) = dispatcher.upgrade() else {
                return;
            };
            match dispatcher.try_borrow_mut() {
                Ok(mut dispatcher) => {
                    dispatcher.expire(id);
                }
                Err(_) => {
                    debug!("Dispatcher busy, chord timer {:?} deferred", id);
                    missed.borrow_mut().push(id);
                }
            }
        });

        let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(handle) => {
                self.armed.push(ArmedTimer {
                    id,
                    handle,
                    fired,
                    _callback: callback,
                });
                Some(id)
            }
            Err(e) => {
                warn!("Failed to schedule chord timer: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(pos) = self.armed.iter().position(|timer| timer.id == id) {
            let timer = self.armed.swap_remove(pos);
            if !timer.fired.get() {
                self.window.clear_timeout_with_handle(timer.handle);
            }
        }
    }

    fn take_missed(&mut self) -> Vec<TimerId> {
        std::mem::take(&mut *self.missed.borrow_mut())
    }
}
