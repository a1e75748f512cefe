use crate::{
    config::UpstreamConfig,
    error::WeatherError,
    model::{Forecast, GridReference, WeatherRequest, WeatherResponse, current_conditions},
    provider::nws::NwsProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod nws;

/// Two-step forecast source: coordinates resolve to a grid cell, the grid
/// cell resolves to a forecast.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn resolve_grid(&self, latitude: &str, longitude: &str)
    -> Result<GridReference, WeatherError>;

    /// Must fail with `NoForecastPeriods` rather than return an empty forecast.
    async fn fetch_forecast(&self, grid: &GridReference) -> Result<Forecast, WeatherError>;

    /// Resolve, fetch and summarise, stopping at the first failure.
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, WeatherError> {
        let grid = self.resolve_grid(&request.latitude, &request.longitude).await?;
        let forecast = self.fetch_forecast(&grid).await?;
        current_conditions(Some(&forecast))
    }
}

/// Construct the NWS provider from upstream settings.
pub fn provider_from_config(config: &UpstreamConfig) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = NwsProvider::new(config).map_err(|e| {
        anyhow::anyhow!("Failed to build HTTP client for {}: {e}", config.base_url)
    })?;

    Ok(Arc::new(provider))
}
