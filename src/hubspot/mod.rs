mod client;
mod model;

pub use client::HubSpotClient;
pub use model::TokenResponse;
