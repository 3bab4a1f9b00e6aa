//! Browser bindings for the hotkeys crate
//!
//! Installs one `keydown` listener on `document` for the lifetime of the
//! page. From JavaScript:
//!
//! ```js
//! import init, { initLogging, install } from "./pkg/hotkeys_web.js";
//!
//! await init();
//! initLogging("info");
//! install(typeof openPropertyModal === "function" ? () => openPropertyModal(null) : null);
//! ```

mod logging;
mod page;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use hotkeys::{Dispatcher, HotkeysConfig, KeyEvent, TargetKind};
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent};

pub use logging::{init_console_logger, init_logging, set_log_level};
pub use page::{DomElement, DomPage};
pub use timer::{WebDispatcher, WebTimer};

/// Classify the element a key event was dispatched to
fn target_kind(event: &KeyboardEvent) -> TargetKind {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|el| TargetKind::from_tag_name(&el.tag_name()))
        .unwrap_or_default()
}

/// Install keyboard shortcuts on the current page
///
/// * `open_new_item` - called with no arguments when "n" is pressed
/// * `config_json` - optional `HotkeysConfig` as JSON; defaults otherwise
///
/// The listener is never removed; it goes away with the page.
#[wasm_bindgen]
pub fn install(
    open_new_item: Option<js_sys::Function>,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => HotkeysConfig::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?,
        None => HotkeysConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Window has no document"))?;

    let page = DomPage::new(window.clone(), document.clone(), &config);
    let dispatcher: Rc<RefCell<WebDispatcher>> = Rc::new_cyclic(|weak| {
        let timer = WebTimer::new(window.clone(), weak.clone());
        let mut dispatcher = Dispatcher::new(page, timer, config);
        if let Some(open_new_item) = open_new_item {
            dispatcher = dispatcher.with_creation_hook(move || {
                if let Err(e) = open_new_item.call0(&JsValue::NULL) {
                    warn!("New item hook threw: {:?}", e);
                }
            });
        }
        RefCell::new(dispatcher)
    });

    let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key_event = KeyEvent::on(event.key(), target_kind(&event));
        let outcome = match dispatcher.try_borrow_mut() {
            Ok(mut dispatcher) => dispatcher.handle_key(&key_event),
            // A hook dispatched a synthetic key event while we were handling one
            Err(_) => {
                warn!("Nested key event {:?} ignored", key_event.key.as_str());
                return;
            }
        };
        if outcome.prevents_default() {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
    listener.forget();

    info!("Keyboard shortcuts installed");
    Ok(())
}
