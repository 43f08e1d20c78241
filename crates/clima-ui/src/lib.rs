//! Presentation layer for Clima.
//!
//! - `view_state`: the explicit display state and the single `render` function
//! - `page`: the element surface (`Page`) and an in-memory implementation
//! - `controller`: the location/search/weather flow
//! - `dom` (wasm32 only): DOM page, browser geolocation, console logging and the
//!   page entry point

pub mod controller;
pub mod page;
pub mod view_state;

#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code)] // wasm-bindgen glue
pub mod dom;

pub use controller::ViewController;
pub use page::{ElementId, MemoryPage, Page};
pub use view_state::{render, ConnectionStatus, PollenTone, TipCategory, ViewState, WeatherView};
