// src/config.rs
use crate::data::DatasetUrls;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.var, self.message)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub urls: DatasetUrls,
    pub http_timeout: Duration,
    /// Rows shown in the raw-data table before it is cut off.
    pub raw_row_limit: usize,
    /// Mapbox token for the satellite base map. Without it only the layers
    /// render.
    pub mapbox_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            urls: DatasetUrls::default(),
            http_timeout: Duration::from_secs(120),
            raw_row_limit: 500,
            mapbox_token: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("RENTMAP_ADDR") {
            cfg.addr = parse("RENTMAP_ADDR", &v)?;
        }
        if let Some(v) = get("RENTMAP_WORKERS") {
            cfg.max_workers = parse("RENTMAP_WORKERS", &v)?;
            if cfg.max_workers == 0 {
                return Err(ConfigError {
                    var: "RENTMAP_WORKERS",
                    message: "must be at least 1".into(),
                });
            }
        }
        if let Some(v) = get("RENTMAP_LISTINGS_URL") {
            cfg.urls.listings = v;
        }
        if let Some(v) = get("RENTMAP_INCIDENTS_URL") {
            cfg.urls.incidents = v;
        }
        if let Some(v) = get("RENTMAP_TREES_URL") {
            cfg.urls.trees = v;
        }
        if let Some(v) = get("RENTMAP_HTTP_TIMEOUT_SECS") {
            cfg.http_timeout = Duration::from_secs(parse("RENTMAP_HTTP_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = get("RENTMAP_RAW_ROW_LIMIT") {
            cfg.raw_row_limit = parse("RENTMAP_RAW_ROW_LIMIT", &v)?;
        }
        cfg.mapbox_token = get("MAPBOX_API_KEY");

        Ok(cfg)
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        message: format!("invalid value '{value}': {e}"),
    })
}
