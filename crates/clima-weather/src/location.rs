//! Device location as a single awaitable capability.
//!
//! A [`LocationProvider`] reports the device position or a [`LocationError`].
//! [`resolve_coordinate`] folds that into a coordinate that is always usable:
//! the device position when available, the configured fallback otherwise.

use std::future::Future;

use crate::error::LocationError;
use crate::types::Coordinate;

/// Source of the device's current position.
pub trait LocationProvider {
    fn current_position(&self) -> impl Future<Output = Result<Coordinate, LocationError>>;
}

/// Provider for environments without any positioning capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeviceLocation;

impl LocationProvider for NoDeviceLocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Provider that always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// Where a resolved coordinate came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedCoordinate {
    FromDevice(Coordinate),
    FromFallback {
        coordinate: Coordinate,
        reason: LocationError,
    },
}

impl ResolvedCoordinate {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::FromDevice(c) => *c,
            Self::FromFallback { coordinate, .. } => *coordinate,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FromFallback { .. })
    }
}

/// Ask the provider for a position, substituting `fallback` on any failure.
pub async fn resolve_coordinate<L: LocationProvider>(
    provider: &L,
    fallback: Coordinate,
) -> ResolvedCoordinate {
    match provider.current_position().await {
        Ok(coordinate) => {
            tracing::info!("Got device location: {}", coordinate);
            ResolvedCoordinate::FromDevice(coordinate)
        }
        Err(reason) => ResolvedCoordinate::FromFallback {
            coordinate: fallback,
            reason,
        },
    }
}
