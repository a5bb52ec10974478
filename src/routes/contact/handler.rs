use axum::extract::{Json, State, rejection::JsonRejection};
use serde_json::Value;

use super::model::UpdateContactRequest;
use crate::{
    AppState,
    utils::{RelayResponse, error_to_relay_response, success_to_relay_response},
};

// 无论成功失败都返回 200，结果放在 success 字段里
#[axum::debug_handler]
pub async fn update_contact(
    State(state): State<AppState>,
    req: Result<Json<UpdateContactRequest>, JsonRejection>,
) -> Json<RelayResponse> {
    let Json(req) = match req {
        Ok(req) => req,
        Err(rejection) => {
            tracing::warn!("Rejected contact update body: {}", rejection);
            return error_to_relay_response(Value::String(rejection.body_text()));
        }
    };

    match req.apply(&state).await {
        Ok(hubspot) => success_to_relay_response(hubspot),
        Err(e) => {
            tracing::error!("Failed to update contact {}: {}", req.contact_id, e);
            error_to_relay_response(e.payload())
        }
    }
}
