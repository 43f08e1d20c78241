//! Weather data for Clima
//!
//! Typed access to the backend's city search and weather endpoints, plus the
//! device location capability with its fallback rule.

pub mod client;
pub mod error;
pub mod location;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, LocationError};
pub use location::{
    resolve_coordinate, FixedLocation, LocationProvider, NoDeviceLocation, ResolvedCoordinate,
};
pub use types::*;
