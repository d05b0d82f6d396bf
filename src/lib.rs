pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pricing;
pub mod routes;
pub mod utils;

use clients::venue_api::VenueClient;

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub venues: VenueClient,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let venues = VenueClient::new(&config.venue_api_url, config.venue_api_timeout)
            .map_err(|e| AppError::Config(format!("Failed to build venue API client: {}", e)))?;

        Ok(Self { venues, config })
    }
}
