//! Mowing Check - Backend Server
//!
//! Answers "is it a good time to mow the lawn here?" for a town, city or
//! postcode, using Open-Meteo geocoding and forecast data.

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

#[cfg(test)]
mod test_support;

pub use config::Config;

use external::{GeocodingClient, WeatherClient};
use services::MowingCheckService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub mowing: MowingCheckService,
}

impl AppState {
    /// Build the upstream clients described by the configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.open_meteo.timeout_secs))
            .build()?;

        let geocoding = GeocodingClient::new(client.clone(), config.open_meteo.geocoding_url.clone());
        let weather = WeatherClient::new(
            client,
            config.open_meteo.forecast_url.clone(),
            config.open_meteo.forecast_days,
        );

        Ok(Self {
            config: Arc::new(config),
            mowing: MowingCheckService::new(geocoding, weather),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mowcheck_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Mowing Check Server");
    tracing::info!("Environment: {}", config.environment);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Mowing Check API v1.0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(server: &MockServer) -> Router {
        let mut config = Config::default();
        config.open_meteo.geocoding_url = format!("{}/v1/search", server.uri());
        config.open_meteo.forecast_url = format!("{}/v1/forecast", server.uri());
        create_app(AppState::from_config(config).unwrap())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/check-mowing")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn mount_upstream(server: &MockServer, forecast: Value) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"name": "Leeds", "latitude": 53.79648, "longitude": -1.54785, "country": "United Kingdom"}
                ]
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_check_mowing_success() {
        let server = MockServer::start().await;
        mount_upstream(&server, test_support::forecast_payload()).await;

        let (status, body) = send(app_for(&server), post_json(r#"{"location": "Leeds"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["canMow"], true);
        assert_eq!(body["recommendation"], "YES, You Can Mow!");
        assert_eq!(body["location"]["name"], "Leeds");
        assert_eq!(body["location"]["country"], "United Kingdom");
        assert!((body["location"]["latitude"].as_f64().unwrap() - 53.79648).abs() < 1e-9);
        assert_eq!(body["weather"]["windSpeed"], 10.0);
        assert_eq!(body["weather"]["conditions"][0]["type"], "positive");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_check_mowing_in_the_rain() {
        let server = MockServer::start().await;
        let mut forecast = test_support::forecast_payload();
        forecast["current"]["precipitation"] = json!(0.6);
        forecast["current"]["rain"] = json!(0.6);
        mount_upstream(&server, forecast).await;

        let (status, body) = send(app_for(&server), post_json(r#"{"location": "Leeds"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["canMow"], false);
        assert_eq!(body["details"], shared::DETAIL_NO);
        assert_eq!(
            body["weather"]["conditions"][1]["text"],
            "Currently raining (0.6mm). Wait for rain to stop and grass to dry."
        );
    }

    #[tokio::test]
    async fn test_check_mowing_rejects_bad_payloads() {
        let server = MockServer::start().await;

        for payload in [r#"{}"#, r#"{"location": "   "}"#, r#"{"location": 42}"#, "not json"] {
            let (status, body) = send(app_for(&server), post_json(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
            assert_eq!(body["error"], "Invalid request");
            assert_eq!(body["message"], shared::LOCATION_REQUIRED);
        }
    }

    #[tokio::test]
    async fn test_check_mowing_location_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let (status, body) = send(app_for(&server), post_json(r#"{"location": "Atlantis"}"#)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], shared::open_meteo::LOCATION_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let server = MockServer::start().await;
        let request = Request::builder()
            .method("GET")
            .uri("/api/check-mowing")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app_for(&server), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
        assert_eq!(body["message"], error::METHOD_NOT_ALLOWED_MESSAGE);
    }

    #[tokio::test]
    async fn test_options_preflight() {
        let server = MockServer::start().await;
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/check-mowing")
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app_for(&server).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, body) = send(app_for(&server), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "development");
    }
}
