//! Core library for the weather gateway.
//!
//! This crate defines:
//! - Request validation and the response shape
//! - The two-step upstream lookup (coordinates -> grid -> forecast)
//! - Temperature classification
//! - Configuration
//!
//! It is used by `weather-server`, but the provider can be driven directly too.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, UpstreamConfig};
pub use error::WeatherError;
pub use model::{
    Forecast, ForecastPeriod, GridReference, TemperatureFeel, WeatherRequest, WeatherResponse,
    current_conditions,
};
pub use provider::{WeatherProvider, nws::NwsProvider, provider_from_config};
