//! Fixtures for unit tests

use serde_json::{json, Value};

/// A mild spring noon: every rule passes
pub fn forecast_payload() -> Value {
    let hours: Vec<String> = (0..72)
        .map(|h| format!("2024-05-{:02}T{:02}:00", 1 + h / 24, h % 24))
        .collect();

    json!({
        "latitude": 53.96,
        "longitude": -1.08,
        "timezone": "Europe/London",
        "current": {
            "time": "2024-05-01T12:00",
            "temperature_2m": 15.0,
            "relative_humidity_2m": 50,
            "precipitation": 0.0,
            "rain": 0.0,
            "weather_code": 1,
            "wind_speed_10m": 10.0,
            "wind_gusts_10m": 18.0
        },
        "hourly": {
            "time": hours,
            "temperature_2m": vec![14.0; 72],
            "precipitation": vec![0.0; 72],
            "weather_code": vec![1; 72],
            "soil_moisture_0_to_1cm": vec![0.25; 72]
        },
        "daily": {
            "time": ["2024-05-01", "2024-05-02", "2024-05-03"],
            "temperature_2m_max": [18.0, 19.0, 17.5],
            "temperature_2m_min": [10.0, 9.5, 8.0],
            "precipitation_sum": [0.0, 0.4, 2.1],
            "precipitation_hours": [0.0, 1.0, 3.0]
        }
    })
}
