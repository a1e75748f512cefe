use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
