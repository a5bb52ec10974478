use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST / 的统一响应结构，HTTP 状态码始终为 200，调用方看 success 字段
#[derive(Debug, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hubspot: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

pub fn success_to_relay_response(hubspot: Value) -> Json<RelayResponse> {
    Json(RelayResponse {
        success: true,
        hubspot: Some(hubspot),
        message: None,
    })
}

pub fn error_to_relay_response(message: Value) -> Json<RelayResponse> {
    Json(RelayResponse {
        success: false,
        hubspot: None,
        message: Some(message),
    })
}

/// 302 跳转
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
