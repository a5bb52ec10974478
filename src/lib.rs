use cache::TokenCache;
use config::Config;
use hubspot::HubSpotClient;

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod hubspot;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tokens: TokenCache,
    pub hubspot: HubSpotClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            hubspot: HubSpotClient::new(config.clone()),
            tokens: TokenCache::new(),
            config,
        }
    }
}
