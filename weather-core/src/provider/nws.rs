//! National Weather Service (api.weather.gov) provider.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    config::UpstreamConfig,
    error::WeatherError,
    model::{Forecast, GridReference},
};

use super::WeatherProvider;

/// Error wording for one upstream endpoint.
struct Endpoint {
    fetch_context: &'static str,
    api: &'static str,
    parse_context: &'static str,
}

const POINTS: Endpoint = Endpoint {
    fetch_context: "failed to fetch grid coordinates",
    api: "NWS API",
    parse_context: "failed to parse grid coordinates response",
};

const FORECAST: Endpoint = Endpoint {
    fetch_context: "failed to fetch forecast",
    api: "forecast API",
    parse_context: "failed to parse forecast response",
};

/// Both NWS endpoints wrap their payload in a `properties` object.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    properties: T,
}

#[derive(Debug, Clone)]
pub struct NwsProvider {
    base_url: String,
    http: Client,
}

impl NwsProvider {
    pub fn new(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self::with_client(&config.base_url, http))
    }

    /// Use a caller-supplied client, e.g. one pointed at a mock server.
    pub fn with_client(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_properties<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &Endpoint,
    ) -> Result<T, WeatherError> {
        let transport = |source| WeatherError::Transport { context: endpoint.fetch_context, source };

        let res = self
            .http
            .get(url)
            .header(ACCEPT, "application/geo+json")
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        debug!(%url, %status, "upstream responded");

        if status != StatusCode::OK {
            let body = body_or_empty(res.text().await);
            return Err(WeatherError::UpstreamStatus {
                api: endpoint.api,
                status: status.as_u16(),
                body,
            });
        }

        let body = res.text().await.map_err(transport)?;

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|source| WeatherError::Decode { context: endpoint.parse_context, source })?;

        Ok(envelope.properties)
    }
}

/// The status is what gets reported; an unreadable error body only costs the detail.
fn body_or_empty(body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|e| {
        debug!(error = %e, "failed to read upstream error body");
        String::new()
    })
}

#[async_trait]
impl WeatherProvider for NwsProvider {
    async fn resolve_grid(
        &self,
        latitude: &str,
        longitude: &str,
    ) -> Result<GridReference, WeatherError> {
        let url = format!("{}/points/{latitude},{longitude}", self.base_url);
        self.get_properties(&url, &POINTS).await
    }

    async fn fetch_forecast(&self, grid: &GridReference) -> Result<Forecast, WeatherError> {
        let url = format!(
            "{}/gridpoints/{}/{},{}/forecast",
            self.base_url, grid.grid_id, grid.grid_x, grid.grid_y
        );

        let forecast: Forecast = self.get_properties(&url, &FORECAST).await?;

        if forecast.periods.is_empty() {
            return Err(WeatherError::NoForecastPeriods);
        }

        Ok(forecast)
    }
}
