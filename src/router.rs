use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::{AppState, middleware::log_requests, routes};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/install", get(routes::oauth::install))
        .route(
            "/",
            get(routes::oauth::callback).post(routes::contact::update_contact),
        )
        .layer(axum::middleware::from_fn(log_requests))
        // HubSpot CRM 卡片跨域调用
        .layer(CorsLayer::permissive())
        .with_state(state)
}
