use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Inclusive lower bound of the "hot" bucket, in the upstream's unit (°F).
pub const HOT_THRESHOLD: i64 = 83;
/// Inclusive upper bound of the "cold" bucket.
pub const COLD_THRESHOLD: i64 = 63;

/// Validated coordinates, passed verbatim to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub latitude: String,
    pub longitude: String,
}

impl WeatherRequest {
    /// Build a request from raw query values. Latitude is checked first.
    pub fn from_query(lat: Option<String>, lon: Option<String>) -> Result<Self, WeatherError> {
        let latitude = lat.filter(|s| !s.is_empty()).ok_or(WeatherError::MissingLatitude)?;
        let longitude = lon.filter(|s| !s.is_empty()).ok_or(WeatherError::MissingLongitude)?;

        Ok(Self { latitude, longitude })
    }
}

/// Forecast office plus cell coordinates, as returned by `/points/{lat},{lon}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridReference {
    pub grid_id: String,
    pub grid_x: i64,
    pub grid_y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub temperature: i64,
    pub short_forecast: String,
}

/// Ordered forecast periods; index 0 is the current one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Forecast {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureFeel {
    Hot,
    Cold,
    Moderate,
}

impl TemperatureFeel {
    pub fn classify(temperature: i64) -> Self {
        if temperature >= HOT_THRESHOLD {
            TemperatureFeel::Hot
        } else if temperature <= COLD_THRESHOLD {
            TemperatureFeel::Cold
        } else {
            TemperatureFeel::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureFeel::Hot => "hot",
            TemperatureFeel::Cold => "cold",
            TemperatureFeel::Moderate => "moderate",
        }
    }
}

impl std::fmt::Display for TemperatureFeel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body returned to gateway clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherResponse {
    // Existing clients read the misspelled key.
    #[serde(rename = "forcast")]
    pub forecast: String,
    pub temperature_feel: TemperatureFeel,
}

/// Summarise the current (first) period of a forecast.
///
/// Emptiness is checked here as well as in the provider, since a `Forecast`
/// can be built by hand.
pub fn current_conditions(forecast: Option<&Forecast>) -> Result<WeatherResponse, WeatherError> {
    let forecast = forecast.ok_or(WeatherError::MissingForecast)?;
    let now = forecast.periods.first().ok_or(WeatherError::NoForecastPeriods)?;

    Ok(WeatherResponse {
        forecast: now.short_forecast.clone(),
        temperature_feel: TemperatureFeel::classify(now.temperature),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(temperature: i64, short_forecast: &str) -> ForecastPeriod {
        ForecastPeriod { temperature, short_forecast: short_forecast.to_string() }
    }

    #[test]
    fn classify_boundaries_are_inclusive() {
        assert_eq!(TemperatureFeel::classify(83), TemperatureFeel::Hot);
        assert_eq!(TemperatureFeel::classify(63), TemperatureFeel::Cold);
        assert_eq!(TemperatureFeel::classify(64), TemperatureFeel::Moderate);
        assert_eq!(TemperatureFeel::classify(82), TemperatureFeel::Moderate);
    }

    #[test]
    fn classify_covers_the_whole_range() {
        for t in -100..=200 {
            let expected = if t >= 83 {
                TemperatureFeel::Hot
            } else if t <= 63 {
                TemperatureFeel::Cold
            } else {
                TemperatureFeel::Moderate
            };
            assert_eq!(TemperatureFeel::classify(t), expected, "temperature {t}");
        }
        assert_eq!(TemperatureFeel::classify(i64::MAX), TemperatureFeel::Hot);
        assert_eq!(TemperatureFeel::classify(i64::MIN), TemperatureFeel::Cold);
    }

    #[test]
    fn from_query_requires_latitude_first() {
        let err = WeatherRequest::from_query(None, None).unwrap_err();
        assert!(matches!(err, WeatherError::MissingLatitude));

        let err = WeatherRequest::from_query(Some(String::new()), Some("-74.0".into())).unwrap_err();
        assert!(matches!(err, WeatherError::MissingLatitude));
    }

    #[test]
    fn from_query_requires_longitude() {
        let err = WeatherRequest::from_query(Some("40.7".into()), None).unwrap_err();
        assert!(matches!(err, WeatherError::MissingLongitude));

        let err = WeatherRequest::from_query(Some("40.7".into()), Some(String::new())).unwrap_err();
        assert_eq!(err.to_string(), "Missing Longitude parameters");
    }

    #[test]
    fn from_query_passes_values_through_verbatim() {
        let req = WeatherRequest::from_query(Some("not-a-number".into()), Some("999".into()))
            .expect("no numeric validation");
        assert_eq!(req.latitude, "not-a-number");
        assert_eq!(req.longitude, "999");
    }

    #[test]
    fn current_conditions_uses_first_period() {
        let forecast = Forecast { periods: vec![period(90, "Sunny"), period(50, "Rain")] };

        let response = current_conditions(Some(&forecast)).unwrap();
        assert_eq!(response.forecast, "Sunny");
        assert_eq!(response.temperature_feel, TemperatureFeel::Hot);
    }

    #[test]
    fn current_conditions_rejects_missing_and_empty() {
        let err = current_conditions(None).unwrap_err();
        assert_eq!(err.to_string(), "forecast data is missing");

        let err = current_conditions(Some(&Forecast::default())).unwrap_err();
        assert_eq!(err.to_string(), "no forecast periods available");
    }

    #[test]
    fn response_uses_legacy_wire_key() {
        let response = WeatherResponse {
            forecast: "Partly Cloudy".to_string(),
            temperature_feel: TemperatureFeel::Moderate,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"forcast": "Partly Cloudy", "temperature_feel": "moderate"})
        );
    }

    #[test]
    fn grid_reference_requires_every_field() {
        let ok: GridReference =
            serde_json::from_str(r#"{"gridId":"OKX","gridX":33,"gridY":37}"#).unwrap();
        assert_eq!(ok, GridReference { grid_id: "OKX".into(), grid_x: 33, grid_y: 37 });

        assert!(serde_json::from_str::<GridReference>(r#"{"gridId":"OKX","gridY":37}"#).is_err());
        assert!(
            serde_json::from_str::<GridReference>(r#"{"gridId":"OKX","gridX":"33","gridY":37}"#)
                .is_err()
        );
    }
}
