use serde::Deserialize;
use serde_json::Value;

use crate::{AppState, auth, error::RelayError};

/// CRM 卡片按钮提交的请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub contact_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub portal_id: Option<String>,
}

impl UpdateContactRequest {
    /// 优先使用 portalId；卡片只传 contactId 时退回 contactId
    pub fn identity(&self) -> &str {
        self.portal_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(self.contact_id.as_str())
    }

    pub async fn apply(&self, state: &AppState) -> Result<Value, RelayError> {
        let access_token =
            auth::ensure_valid_token(&state.tokens, &state.hubspot, self.identity()).await?;

        state
            .hubspot
            .patch_contact(&access_token, &self.contact_id, self.message.as_deref())
            .await
            .map_err(RelayError::DownstreamError)
    }
}
