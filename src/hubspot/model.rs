use serde::{Deserialize, Serialize};

/// 令牌端点响应
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    // 刷新响应不一定携带
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct AuthorizationCodeGrant<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
    pub code: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenGrant<'a> {
    pub grant_type: &'static str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub refresh_token: &'a str,
}

/// PATCH /crm/v3/objects/contacts/{id} 请求体
#[derive(Debug, Serialize)]
pub struct ContactPatch<'a> {
    pub properties: ContactProperties<'a>,
}

#[derive(Debug, Serialize)]
pub struct ContactProperties<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
}

impl<'a> ContactPatch<'a> {
    pub fn message(message: Option<&'a str>) -> Self {
        Self {
            properties: ContactProperties { message },
        }
    }
}
