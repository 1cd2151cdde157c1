use crate::config::Config;
use crate::data::{CsvSource, Datasets};

/// Everything a request handler needs, shared across the worker pool.
pub struct AppState {
    pub config: Config,
    pub datasets: Datasets,
}

impl AppState {
    pub fn new(config: Config, source: Box<dyn CsvSource>) -> Self {
        let datasets = Datasets::new(source, config.urls.clone());
        Self { config, datasets }
    }
}
