use thiserror::Error;

/// Everything that can go wrong while answering a weather request.
///
/// The `Display` text of each variant is what the gateway sends back to the
/// client, so keep messages human readable.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Missing Latitude parameters")]
    MissingLatitude,

    #[error("Missing Longitude parameters")]
    MissingLongitude,

    /// The request never produced a response (connect failure, timeout, bad URL).
    #[error("{context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with something other than 200 OK.
    #[error("{api} returned status {status}: {body}")]
    UpstreamStatus {
        api: &'static str,
        status: u16,
        body: String,
    },

    #[error("{context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no forecast periods available")]
    NoForecastPeriods,

    #[error("forecast data is missing")]
    MissingForecast,
}

impl WeatherError {
    /// `true` when the caller sent a bad request, `false` for upstream or data failures.
    pub fn is_client_error(&self) -> bool {
        matches!(self, WeatherError::MissingLatitude | WeatherError::MissingLongitude)
    }
}
