//! `navigator.geolocation` as a [`LocationProvider`].
//!
//! The callback pair of `getCurrentPosition` is folded into a promise and
//! awaited. No timeout is requested; if the browser never answers, the
//! future never resolves.

use clima_weather::{Coordinate, LocationError, LocationProvider};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError, Navigator};

// GeolocationPositionError codes
const PERMISSION_DENIED: u16 = 1;
const POSITION_UNAVAILABLE: u16 = 2;
const TIMEOUT: u16 = 3;

pub struct BrowserGeolocation {
    navigator: Navigator,
}

impl BrowserGeolocation {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    fn is_supported(&self) -> bool {
        Reflect::get(&self.navigator, &JsValue::from_str("geolocation"))
            .map(|value| !value.is_undefined() && !value.is_null())
            .unwrap_or(false)
    }
}

impl LocationProvider for BrowserGeolocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        if !self.is_supported() {
            return Err(LocationError::Unsupported);
        }
        let geolocation = self
            .navigator
            .geolocation()
            .map_err(|_| LocationError::Unsupported)?;

        let mut request_error = None;
        let promise = Promise::new(&mut |resolve: Function, reject: Function| {
            if let Err(e) =
                geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
            {
                request_error = Some(e);
            }
        });
        if let Some(e) = request_error {
            return Err(LocationError::Other(format!("{:?}", e)));
        }

        let value = JsFuture::from(promise).await.map_err(location_error)?;
        let position: GeolocationPosition = value.unchecked_into();
        let coords = position.coords();
        Ok(Coordinate::new(coords.latitude(), coords.longitude()))
    }
}

fn location_error(value: JsValue) -> LocationError {
    match value.dyn_into::<GeolocationPositionError>() {
        Ok(err) => match err.code() {
            PERMISSION_DENIED => LocationError::PermissionDenied,
            POSITION_UNAVAILABLE => LocationError::ServiceUnavailable,
            TIMEOUT => LocationError::Timeout,
            _ => LocationError::Other(err.message()),
        },
        Err(other) => LocationError::Other(format!("{:?}", other)),
    }
}
