//! `PageHost` over the live DOM

use hotkeys::{Focusable, HotkeysConfig, PageHost};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// The current browser page
pub struct DomPage {
    window: Window,
    document: Document,
    search_input_selector: String,
    settings_control_id: String,
}

impl DomPage {
    pub fn new(window: Window, document: Document, config: &HotkeysConfig) -> Self {
        Self {
            window,
            document,
            search_input_selector: config.search_input_selector.clone(),
            settings_control_id: config.settings_control_id.clone(),
        }
    }
}

/// Focus target found on the page
pub struct DomElement(HtmlElement);

impl Focusable for DomElement {
    fn focus(&self) {
        if let Err(e) = self.0.focus() {
            warn!("Failed to focus element: {:?}", e);
        }
    }
}

impl PageHost for DomPage {
    type Element = DomElement;

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn redirect(&self, path: &str) {
        if let Err(e) = self.window.location().set_href(path) {
            warn!("Failed to navigate to {}: {:?}", path, e);
        }
    }

    fn search_input(&self) -> Option<DomElement> {
        self.document
            .query_selector(&self.search_input_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
    }

    fn settings_control(&self) -> Option<DomElement> {
        self.document
            .get_element_by_id(&self.settings_control_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomElement)
    }

    fn show_help(&self, text: &str) {
        if let Err(e) = self.window.alert_with_message(text) {
            warn!("Failed to show help dialog: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotkeys::{Dispatcher, ManualTimer};

    fn focus_targets<H: PageHost<Element = DomElement>>() {}

    #[test]
    fn test_dom_page_drives_dispatcher() {
        focus_targets::<DomPage>();
        let _ = Dispatcher::<DomPage, ManualTimer>::new;
    }
}
