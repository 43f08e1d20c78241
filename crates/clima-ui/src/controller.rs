//! Drives the location → weather flow and the manual city search.
//!
//! Every operation is a linear sequence ending in exactly one status update.
//! State and page live in `RefCell`s that are only borrowed between await
//! points, so browser events arriving mid-flight never hit a borrow conflict.
//! Overlapping chains are not cancelled; their writes may interleave.

use std::cell::{Cell, Ref, RefCell, RefMut};

use clima_core::AppError;
use clima_weather::{
    resolve_coordinate, ApiClient, Coordinate, LocationProvider, ResolvedCoordinate,
};

use crate::page::Page;
use crate::view_state::{render, ConnectionStatus, ViewState, WeatherView};

/// Title shown when the device reported its own position.
pub const DEVICE_LOCATION_TITLE: &str = "SUA LOCALIZAÇÃO";
pub const ALERT_EMPTY_QUERY: &str = "Digite o nome de uma cidade!";
pub const ALERT_CITY_NOT_FOUND: &str = "Cidade não encontrada!";
pub const ALERT_SEARCH_FAILED: &str = "Erro ao buscar cidade.";

pub struct ViewController<P, L> {
    page: RefCell<P>,
    state: RefCell<ViewState>,
    location: L,
    api: ApiClient,
    fallback: Coordinate,
    last_error: Cell<Option<&'static str>>,
    in_flight: Cell<u32>,
}

impl<P: Page, L: LocationProvider> ViewController<P, L> {
    pub fn new(page: P, location: L, api: ApiClient, fallback: Coordinate) -> Self {
        Self {
            page: RefCell::new(page),
            state: RefCell::new(ViewState::default()),
            location,
            api,
            fallback,
            last_error: Cell::new(None),
            in_flight: Cell::new(0),
        }
    }

    pub fn page(&self) -> Ref<'_, P> {
        self.page.borrow()
    }

    pub fn page_mut(&self) -> RefMut<'_, P> {
        self.page.borrow_mut()
    }

    /// Snapshot of what is currently displayed.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// User-facing message of the most recent failed request, cleared once
    /// weather is displayed again.
    pub fn last_error(&self) -> Option<&'static str> {
        self.last_error.get()
    }

    /// Page-ready entry point: locate the device, then show its weather.
    pub async fn initialize(&self) {
        let _guard = self.begin_chain("initialize");
        self.set_status(ConnectionStatus::AcquiringLocation);

        match resolve_coordinate(&self.location, self.fallback).await {
            ResolvedCoordinate::FromDevice(coordinate) => {
                self.location_succeeded(coordinate).await;
            }
            ResolvedCoordinate::FromFallback { reason, .. } => {
                self.location_failed(&AppError::from(reason)).await;
            }
        }
    }

    pub async fn on_location_success(&self, coordinate: Coordinate) {
        let _guard = self.begin_chain("device location");
        self.location_succeeded(coordinate).await;
    }

    /// Degraded path: log, flag GPS as off, and show the fallback city.
    pub async fn on_location_failure(&self, reason: &AppError) {
        let _guard = self.begin_chain("fallback location");
        self.location_failed(reason).await;
    }

    /// Search for the city typed into the input and show its weather.
    pub async fn search_city(&self) {
        let query = self.page.borrow().city_query();
        if query.is_empty() {
            self.alert(ALERT_EMPTY_QUERY);
            return;
        }

        let _guard = self.begin_chain("city search");
        self.set_status(ConnectionStatus::Searching);

        match self.api.search_city(&query).await {
            Ok(city) => {
                self.update(|state| state.title = Some(city.display_title()));
                self.page.borrow_mut().clear_city_query();
                self.load_weather(city.coordinate()).await;
            }
            Err(e) if e.is_not_found() => {
                tracing::info!("City {:?} not found", query);
                self.last_error.set(Some(AppError::from(e).user_message()));
                self.alert(ALERT_CITY_NOT_FOUND);
                self.set_status(ConnectionStatus::Error);
            }
            Err(e) => {
                self.record_error("City search failed", &AppError::from(e));
                self.alert(ALERT_SEARCH_FAILED);
                self.set_status(ConnectionStatus::Error);
            }
        }
    }

    /// Fetch and display weather for `coordinate`. Failures only reach the
    /// status indicator, never an alert.
    pub async fn fetch_weather(&self, coordinate: Coordinate) {
        let _guard = self.begin_chain("weather fetch");
        self.load_weather(coordinate).await;
    }

    async fn location_succeeded(&self, coordinate: Coordinate) {
        self.update(|state| state.title = Some(DEVICE_LOCATION_TITLE.to_string()));
        self.load_weather(coordinate).await;
    }

    async fn location_failed(&self, reason: &AppError) {
        tracing::warn!("Device location unavailable: {}", reason);
        self.set_status(ConnectionStatus::Unsupported);
        self.load_weather(self.fallback).await;
    }

    async fn load_weather(&self, coordinate: Coordinate) {
        self.set_status(ConnectionStatus::Loading);

        match self.api.fetch_weather(coordinate).await {
            Ok(weather) => {
                let view = WeatherView::from(&weather);
                self.last_error.set(None);
                self.update(|state| {
                    state.weather = Some(view);
                    state.status = ConnectionStatus::Online;
                });
                tracing::info!("Weather displayed for {}", coordinate);
            }
            Err(e) => {
                self.record_error("Weather fetch failed", &AppError::from(e));
                self.set_status(ConnectionStatus::Error);
            }
        }
    }

    fn set_status(&self, status: ConnectionStatus) {
        self.update(|state| state.status = status);
    }

    fn record_error(&self, context: &str, err: &AppError) {
        tracing::error!("{}: {} ({})", context, err, err.user_message());
        self.last_error.set(Some(err.user_message()));
    }

    fn alert(&self, message: &str) {
        self.page.borrow_mut().alert(message);
    }

    /// Apply a change to the view state and re-render.
    fn update(&self, change: impl FnOnce(&mut ViewState)) {
        let mut state = self.state.borrow_mut();
        change(&mut state);
        render(&state, &mut *self.page.borrow_mut());
    }

    fn begin_chain(&self, name: &'static str) -> ChainGuard<'_> {
        let running = self.in_flight.get();
        if running > 0 {
            tracing::debug!("{} started while {} other request(s) in flight", name, running);
        }
        self.in_flight.set(running + 1);
        ChainGuard {
            in_flight: &self.in_flight,
        }
    }
}

struct ChainGuard<'a> {
    in_flight: &'a Cell<u32>,
}

impl Drop for ChainGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
    }
}
