//! Browser entry point.
//!
//! On page ready: builds the controller against the live document, wires the
//! Enter key on the city input, publishes `window.buscarCidadeBotao` for the
//! search button, and starts the location → weather flow.

mod console;
mod geolocation;
mod page;

pub use console::MakeConsoleWriter;
pub use geolocation::BrowserGeolocation;
pub use page::DomPage;

use std::cell::RefCell;
use std::rc::Rc;

use clima_core::Config;
use clima_weather::{ApiClient, Coordinate};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, Window};

use crate::controller::ViewController;
use crate::page::ElementId;

type DomController = ViewController<DomPage, BrowserGeolocation>;

/// Name of the global the search button's `onclick` calls.
const SEARCH_FUNCTION: &str = "buscarCidadeBotao";

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<DomController>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = Config::default();
    console::init(&config.logging.filter);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount(config) {
                tracing::error!("Failed to start widget: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount(config)?;
    }
    Ok(())
}

/// Trigger a city search from the current input text. Reached from the Enter
/// key and from `window.buscarCidadeBotao`.
fn search_city() {
    let Some(controller) = CONTROLLER.with(|slot| slot.borrow().clone()) else {
        tracing::warn!("Search triggered before the widget was mounted");
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        controller.search_city().await;
    });
}

fn mount(mut config: Config) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    // The backend serves the page, so the API lives on the page origin.
    config.api.base_url = window.location().origin()?;
    let api = ApiClient::new(&config.api.base_url).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let fallback = Coordinate::new(
        config.location.fallback_latitude,
        config.location.fallback_longitude,
    );

    let controller = Rc::new(ViewController::new(
        DomPage::new(window.clone(), document.clone()),
        BrowserGeolocation::new(window.navigator()),
        api,
        fallback,
    ));
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&controller)));

    wire_enter_key(&document)?;
    publish_search_function(&window)?;

    tracing::info!("Widget mounted, API at {}", config.api.base_url);
    wasm_bindgen_futures::spawn_local(async move {
        controller.initialize().await;
    });
    Ok(())
}

fn wire_enter_key(document: &Document) -> Result<(), JsValue> {
    let Some(input) = document.get_element_by_id(ElementId::CityInput.dom_id()) else {
        return Ok(());
    };

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        if event.key() == "Enter" {
            search_city();
        }
    });
    input.add_event_listener_with_callback("keypress", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}

fn publish_search_function(window: &Window) -> Result<(), JsValue> {
    let handler = Closure::<dyn Fn()>::new(search_city);
    js_sys::Reflect::set(window, &JsValue::from_str(SEARCH_FUNCTION), handler.as_ref())?;
    handler.forget();
    Ok(())
}
