use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::model::{AuthorizationCodeGrant, ContactPatch, RefreshTokenGrant, TokenResponse};
use crate::config::Config;
use crate::error::UpstreamFailure;

/// HubSpot 出站调用：OAuth 令牌端点和联系人接口
#[derive(Debug, Clone)]
pub struct HubSpotClient {
    http: reqwest::Client,
    config: Config,
}

impl HubSpotClient {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build HTTP client");
        Self { http, config }
    }

    /// 构造授权页地址，参数做 URL 编码
    pub fn authorize_url(&self) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.config.authorize_url,
            [
                ("client_id", self.config.client_id.as_str()),
                ("scope", self.config.scopes.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ],
        )
    }

    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, UpstreamFailure> {
        let grant = AuthorizationCodeGrant {
            grant_type: "authorization_code",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            redirect_uri: &self.config.redirect_uri,
            code,
        };
        let response = self
            .http
            .post(self.config.token_url())
            .form(&grant)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, UpstreamFailure> {
        let grant = RefreshTokenGrant {
            grant_type: "refresh_token",
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            refresh_token,
        };
        let response = self
            .http
            .post(self.config.token_url())
            .form(&grant)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn patch_contact(
        &self,
        access_token: &str,
        contact_id: &str,
        message: Option<&str>,
    ) -> Result<Value, UpstreamFailure> {
        let url = self.config.contact_url(contact_id).ok_or_else(|| {
            UpstreamFailure::Transport(format!("invalid contact id: {contact_id:?}"))
        })?;
        let response = self
            .http
            .patch(url)
            .bearer_auth(access_token)
            .json(&ContactPatch::message(message))
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamFailure> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(UpstreamFailure::rejected(status, text));
    }
    Ok(response.json::<T>().await?)
}
