use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, net::SocketAddr, path::Path, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the upstream weather API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL without trailing slash, e.g. "https://api.weather.gov".
    pub base_url: String,

    /// api.weather.gov refuses requests without a User-Agent.
    pub user_agent: String,

    /// Per-request deadline for each upstream call.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("weather-gateway/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level configuration. Every key is optional.
///
/// Example TOML:
/// listen = "127.0.0.1:9000"
///
/// [upstream]
/// base_url = "https://api.weather.gov"
/// timeout_secs = 5
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listen: SocketAddr,
    pub upstream: UpstreamConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load config from an explicit file. Unlike a missing key, a missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents).context("Invalid configuration TOML")?;
        Ok(cfg)
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_fixed_deployment() {
        let cfg = Config::default();

        assert_eq!(cfg.listen.port(), 8080);
        assert_eq!(cfg.upstream.base_url, "https://api.weather.gov");
        assert_eq!(cfg.upstream.timeout(), Duration::from_secs(10));
        assert!(cfg.upstream.user_agent.starts_with("weather-gateway/"));
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = Config::from_toml_str("").expect("empty config is valid");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let cfg = Config::from_toml_str(
            r#"
            listen = "127.0.0.1:9000"

            [upstream]
            timeout_secs = 3
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.listen, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.upstream.timeout_secs, 3);
        assert_eq!(cfg.upstream.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_listen_address_is_rejected() {
        let err = Config::from_toml_str(r#"listen = "not an address""#).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration TOML"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[upstream]\nbase_url = \"http://localhost:1234\"").unwrap();

        let cfg = Config::load(file.path()).expect("config file should load");
        assert_eq!(cfg.upstream.base_url, "http://localhost:1234");
    }

    #[test]
    fn load_errors_on_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_or_default_without_path_reads_nothing() {
        let cfg = Config::load_or_default(None).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
