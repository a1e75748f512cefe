use axum::{
    Json,
    extract::{Query, State},
};
use tracing::info;
use weather_core::{WeatherRequest, WeatherResponse};

use crate::{error::ApiError, state::AppState};

/// Coordinates as sent by the client. A repeated key keeps its first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl WeatherQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "lat" if query.lat.is_none() => query.lat = Some(value),
                "lon" if query.lon.is_none() => query.lon = Some(value),
                _ => {}
            }
        }

        query
    }
}

/// `GET /weather?lat=..&lon=..`
pub async fn get_weather(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let query = WeatherQuery::from_pairs(pairs);
    let request = WeatherRequest::from_query(query.lat, query.lon)?;
    let response = state.provider.get_weather(&request).await?;

    info!(
        lat = %request.latitude,
        lon = %request.longitude,
        feel = %response.temperature_feel,
        "Served current weather"
    );

    Ok(Json(response))
}
