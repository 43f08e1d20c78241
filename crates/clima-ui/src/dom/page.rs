use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, Window};

use crate::page::{ElementId, Page};

/// [`Page`] backed by the live document. Each lookup is guarded; missing
/// elements are skipped silently.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn element(&self, id: ElementId) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id.dom_id())
    }

    fn input(&self) -> Option<HtmlInputElement> {
        self.element(ElementId::CityInput)?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }
}

impl Page for DomPage {
    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.element(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_color(&mut self, id: ElementId, color: &str) {
        let Some(el) = self.element(id) else { return };
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            if let Err(e) = html.style().set_property("color", color) {
                tracing::debug!("Could not set colour on #{}: {:?}", id, e);
            }
        }
    }

    fn set_class_name(&mut self, id: ElementId, class_name: &str) {
        if let Some(el) = self.element(id) {
            el.set_class_name(class_name);
        }
    }

    fn city_query(&self) -> String {
        self.input().map(|input| input.value()).unwrap_or_default()
    }

    fn clear_city_query(&mut self) {
        if let Some(input) = self.input() {
            input.set_value("");
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::debug!("alert() failed: {:?}", e);
        }
    }
}
