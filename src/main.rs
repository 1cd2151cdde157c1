use crate::config::Config;
use crate::data::HttpSource;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod deck;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Configuration from the environment
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Data source; nothing is fetched until the first request
    let source = match HttpSource::new(config.http_timeout) {
        Ok(s) => s,
        Err(e) => {
            error!("❌ HTTP client setup failed: {e}");
            std::process::exit(1);
        }
    };

    if config.mapbox_token.is_none() {
        warn!("MAPBOX_API_KEY not set, maps render without the satellite base layer");
    }

    let addr = config.addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = Arc::new(AppState::new(config, Box::new(source)));

    info!("Starting server at http://{addr}");

    // 3️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                warn!(%method, path = %path, status = err.status(), "{err}");
                responses::error_to_response(err)
            }
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
