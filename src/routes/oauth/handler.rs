use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::model::{CallbackQuery, WELCOME_PAGE};
use crate::{AppState, auth, utils::found};

#[axum::debug_handler]
pub async fn install(State(state): State<AppState>) -> Response {
    match state.hubspot.authorize_url() {
        Ok(url) => found(url.as_str()),
        Err(e) => {
            tracing::error!("Failed to build authorize url: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Invalid authorize url: {}", e),
            )
                .into_response()
        }
    }
}

// 没有 code 时返回欢迎页，否则完成 OAuth 回调
#[axum::debug_handler]
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let Some(code) = query.code() else {
        return Html(WELCOME_PAGE).into_response();
    };
    let identity = query.identity();

    match auth::install(&state.tokens, &state.hubspot, identity, code).await {
        Ok(()) => {
            tracing::info!("Installed for portal {}", identity);
            found(&state.config.post_install_redirect)
        }
        Err(e) => {
            tracing::error!("Failed to exchange code for portal {}: {}", identity, e);
            (
                StatusCode::OK,
                format!("Error exchanging code for token: {}", e.payload_text()),
            )
                .into_response()
        }
    }
}
