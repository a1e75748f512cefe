use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};
use weather_core::WeatherError;

/// Wraps core errors so they can be returned from handlers.
///
/// The body is the plain-text error message; only missing parameters map to 400.
#[derive(Debug)]
pub struct ApiError(pub WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            warn!(error = %self.0, "Rejected weather request");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self.0, "Weather lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, self.0.to_string()).into_response()
    }
}
