//! HTTP client for the weather backend.
//!
//! Two GET endpoints, relative to the configured base URL:
//! - `/api/cidade?nome=<name>` resolves a city name to a [`CityResult`]
//! - `/api/clima?lat=<lat>&lon=<lon>` returns a [`WeatherResult`]
//!
//! Requests carry no timeout and are never retried.

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::types::{CityResult, Coordinate, WeatherResult};

const CITY_PATH: &str = "/api/cidade";
const WEATHER_PATH: &str = "/api/clima";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (e.g. the page origin).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a city name. Every non-2xx status is reported as
    /// [`ApiError::CityNotFound`].
    pub async fn search_city(&self, name: &str) -> Result<CityResult, ApiError> {
        let url = self.base_url.join(CITY_PATH)?;
        tracing::debug!("Searching city {:?}", name);

        let response = self
            .client
            .get(url)
            .query(&[("nome", name)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("City search returned status {}", status);
            return Err(ApiError::CityNotFound {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let city: CityResult = parse_body(response).await?;
        tracing::info!(
            "Resolved {:?} to {} ({}, {})",
            name,
            city.name,
            city.latitude,
            city.longitude
        );
        Ok(city)
    }

    /// Fetch the current weather for a coordinate.
    pub async fn fetch_weather(&self, coordinate: Coordinate) -> Result<WeatherResult, ApiError> {
        let url = self.base_url.join(WEATHER_PATH)?;
        tracing::debug!("Fetching weather for {}", coordinate);

        let response = self
            .client
            .get(url)
            .query(&[
                ("lat", coordinate.latitude.to_string()),
                ("lon", coordinate.longitude.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        parse_body(response).await
    }
}

async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_base_url() {
        assert!(matches!(
            ApiClient::new("/api"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoints_replace_base_path() {
        let client = ApiClient::new("http://localhost:8080/app/").unwrap();
        let url = client.base_url().join(WEATHER_PATH).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/clima");
    }

    #[test]
    fn test_coordinates_format_like_js_numbers() {
        assert_eq!((-23.55f64).to_string(), "-23.55");
        assert_eq!(21.0f64.to_string(), "21");
    }
}
