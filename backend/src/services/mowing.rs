//! Mowing check service
//!
//! Runs the request pipeline: validate the location, resolve it, fetch the
//! weather snapshot, evaluate it. The two upstream calls run one after the
//! other since the forecast needs the resolved coordinates. Any failure ends
//! the check; nothing is retried.

use chrono::Utc;
use shared::{evaluate, validate_location_input, validate_snapshot, MowingCheckResponse};

use crate::error::{AppError, AppResult};
use crate::external::{GeocodingClient, WeatherClient};

/// Service for answering "can I mow here now?"
#[derive(Clone)]
pub struct MowingCheckService {
    geocoding: GeocodingClient,
    weather: WeatherClient,
}

impl MowingCheckService {
    pub fn new(geocoding: GeocodingClient, weather: WeatherClient) -> Self {
        Self { geocoding, weather }
    }

    /// Check mowing conditions for a free-text location
    pub async fn check(&self, location: &str) -> AppResult<MowingCheckResponse> {
        let location = validate_location_input(location)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let resolved = self.geocoding.resolve(location).await?;
        let snapshot = self.weather.fetch_snapshot(&resolved.coordinates).await?;

        validate_snapshot(&snapshot).map_err(|msg| {
            AppError::UpstreamFetch(format!("Weather data is incomplete: {}", msg))
        })?;

        let assessment = evaluate(&snapshot);

        tracing::info!(
            location = %resolved.name,
            can_mow = assessment.can_mow,
            blocking = assessment.negative_reasons().count(),
            "Mowing check completed"
        );

        Ok(MowingCheckResponse::new(
            &resolved,
            &snapshot,
            assessment,
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::forecast_payload;
    use reqwest::Client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_geocoding(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"name": "York", "latitude": 53.95763, "longitude": -1.08271, "country": "United Kingdom"}
                ]
            })))
            .mount(server)
            .await;
    }

    fn service_for(server: &MockServer) -> MowingCheckService {
        let client = Client::new();
        MowingCheckService::new(
            GeocodingClient::new(client.clone(), format!("{}/v1/search", server.uri())),
            WeatherClient::new(client, format!("{}/v1/forecast", server.uri()), 3),
        )
    }

    #[tokio::test]
    async fn test_check_nominal_conditions() {
        let mock_server = MockServer::start().await;
        mount_geocoding(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
            .mount(&mock_server)
            .await;

        let response = service_for(&mock_server).check("  York ").await.unwrap();
        assert!(response.success);
        assert!(response.can_mow);
        assert_eq!(response.location.name, "York");
        assert_eq!(response.recommendation, shared::RECOMMENDATION_YES);
        assert_eq!(response.weather.conditions.len(), 3);
        assert_eq!(response.weather.summary, "Partly Cloudy");
    }

    #[tokio::test]
    async fn test_check_blank_location_skips_network() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = service_for(&mock_server).check("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_check_rejects_incomplete_snapshot() {
        let mock_server = MockServer::start().await;
        mount_geocoding(&mock_server).await;

        let mut payload = forecast_payload();
        payload["daily"]["temperature_2m_max"] = serde_json::json!([]);
        payload["daily"]["temperature_2m_min"] = serde_json::json!([]);
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .mount(&mock_server)
            .await;

        let err = service_for(&mock_server).check("York").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamFetch(_)));
    }

    #[tokio::test]
    async fn test_check_weather_failure_is_terminal() {
        let mock_server = MockServer::start().await;
        mount_geocoding(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = service_for(&mock_server).check("York").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch weather data");
    }
}
