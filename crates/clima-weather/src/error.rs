use clima_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use thiserror::Error;

/// Errors from the `/api/cidade` and `/api/clima` endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any non-2xx answer from the geocoding endpoint.
    #[error("City not found: {name} (status {status})")]
    CityNotFound { name: String, status: u16 },

    #[error("Server returned status {status}")]
    Status { status: u16 },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the geocoding endpoint rejected the name, as opposed to a
    /// transport or payload failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::CityNotFound { .. })
    }
}

/// Location service errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location not supported on this device")]
    Unsupported,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location error: {0}")]
    Other(String),
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::InvalidUrl(e) => AppError::Other(e.into()),
            ApiError::Network(e) => AppError::Network(e.into_network_error()),
            ApiError::CityNotFound { name, .. } => {
                AppError::Weather(WeatherError::CityNotFound(name))
            }
            ApiError::Status { status } => AppError::Network(NetworkError::ServerError {
                status,
                message: format!("weather endpoint returned {}", status),
            }),
            ApiError::Parse(e) => AppError::Weather(WeatherError::InvalidPayload(e.to_string())),
        }
    }
}

impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        AppError::Location(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let not_found = ApiError::CityNotFound {
            name: "Xyz".into(),
            status: 404,
        };
        assert!(not_found.is_not_found());
        assert!(!ApiError::Status { status: 500 }.is_not_found());
        assert!(not_found.to_string().contains("404"));
    }

    #[test]
    fn test_not_found_maps_to_weather_error() {
        let app: AppError = ApiError::CityNotFound {
            name: "Atlantis".into(),
            status: 404,
        }
        .into();
        assert!(matches!(
            app,
            AppError::Weather(WeatherError::CityNotFound(ref n)) if n == "Atlantis"
        ));
    }

    #[test]
    fn test_status_maps_to_server_error() {
        let app: AppError = ApiError::Status { status: 503 }.into();
        assert!(matches!(
            app,
            AppError::Network(NetworkError::ServerError { status: 503, .. })
        ));
        assert!(app.user_message().contains("later"));
    }

    #[test]
    fn test_parse_maps_to_invalid_payload() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app: AppError = ApiError::Parse(parse_err).into();
        assert!(matches!(app, AppError::Weather(WeatherError::InvalidPayload(_))));
    }

    #[test]
    fn test_location_error_maps() {
        let app: AppError = LocationError::PermissionDenied.into();
        assert_eq!(app.to_string(), "Location error: Location permission denied");
    }

    #[test]
    fn test_location_error_display() {
        assert_eq!(
            LocationError::Unsupported.to_string(),
            "Location not supported on this device"
        );
        assert!(LocationError::Other("boom".into()).to_string().contains("boom"));
    }
}
