use anyhow::Context;
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};
use tracing::info;
use weather_core::{Config, provider_from_config};

use crate::{routes::app, state::AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather gateway HTTP server")]
pub struct Cli {
    /// TOML config file. Built-in defaults are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listen address, e.g. "127.0.0.1:8080". Overrides the config file.
    #[arg(long)]
    pub listen: Option<SocketAddr>,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load_or_default(self.config.as_deref())?;

        if let Some(listen) = self.listen {
            config.listen = listen;
        }

        Ok(config)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        let provider = provider_from_config(&config.upstream)?;
        let router = app(AppState::new(provider));

        let listener = tokio::net::TcpListener::bind(config.listen)
            .await
            .with_context(|| format!("Failed to bind {}", config.listen))?;

        info!(listen = %config.listen, upstream = %config.upstream.base_url, "Server starting");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
