use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// HubSpot 端调用失败的原因
#[derive(Debug, Clone, Error)]
pub enum UpstreamFailure {
    /// 对端返回了非 2xx 状态码，body 原样转发
    #[error("HubSpot responded with {status}: {body}")]
    Rejected { status: StatusCode, body: Value },
    /// 请求未能完成，或成功响应无法解析
    #[error("{0}")]
    Transport(String),
}

impl UpstreamFailure {
    /// 对外暴露的错误内容：有响应体用响应体，否则用错误描述
    pub fn payload(&self) -> Value {
        match self {
            UpstreamFailure::Rejected { body, .. } => body.clone(),
            UpstreamFailure::Transport(message) => Value::String(message.clone()),
        }
    }

    /// 将响应体解析为 JSON，无法解析时按纯文本保留
    pub fn rejected(status: StatusCode, text: String) -> Self {
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        UpstreamFailure::Rejected { status, body }
    }
}

impl From<reqwest::Error> for UpstreamFailure {
    fn from(e: reqwest::Error) -> Self {
        UpstreamFailure::Transport(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("App not installed")]
    NotInstalled,
    #[error("refresh token grant failed: {0}")]
    RefreshFailed(UpstreamFailure),
    #[error("authorization code grant failed: {0}")]
    ExchangeFailed(UpstreamFailure),
    #[error("contact update failed: {0}")]
    DownstreamError(UpstreamFailure),
}

impl RelayError {
    pub fn payload(&self) -> Value {
        match self {
            RelayError::NotInstalled => Value::String(self.to_string()),
            RelayError::RefreshFailed(failure)
            | RelayError::ExchangeFailed(failure)
            | RelayError::DownstreamError(failure) => failure.payload(),
        }
    }

    /// 纯文本形式，用于回调失败时直接写回浏览器
    pub fn payload_text(&self) -> String {
        match self.payload() {
            Value::String(text) => text,
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejected_body_keeps_json_shape() {
        let failure = UpstreamFailure::rejected(
            StatusCode::BAD_REQUEST,
            r#"{"status":"BAD_REFRESH_TOKEN","message":"missing or unknown refresh token"}"#.into(),
        );

        assert_eq!(
            RelayError::RefreshFailed(failure).payload(),
            json!({"status": "BAD_REFRESH_TOKEN", "message": "missing or unknown refresh token"})
        );
    }

    #[test]
    fn rejected_non_json_body_is_kept_as_text() {
        let failure = UpstreamFailure::rejected(StatusCode::BAD_GATEWAY, "upstream down".into());
        let err = RelayError::ExchangeFailed(failure);

        assert_eq!(err.payload(), json!("upstream down"));
        assert_eq!(err.payload_text(), "upstream down");
    }

    #[test]
    fn not_installed_payload_is_message() {
        assert_eq!(RelayError::NotInstalled.payload(), json!("App not installed"));
    }
}
