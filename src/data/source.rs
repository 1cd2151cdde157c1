// source.rs
use crate::data::DataError;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("rentmap/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back the raw text of a CSV resource.
pub trait CsvSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, DataError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl CsvSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, DataError> {
        let start = Instant::now();
        debug!(url, "fetching csv");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = resp
            .text()
            .map_err(|e| DataError::Network(e.to_string()))?;

        info!(
            url,
            bytes = text.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "📄 fetched csv"
        );
        Ok(text)
    }
}
