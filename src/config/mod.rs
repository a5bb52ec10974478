use std::env;

use url::Url;

pub const DEFAULT_AUTHORIZE_URL: &str = "https://app.hubspot.com/oauth/authorize";
pub const DEFAULT_API_BASE_URL: &str = "https://api.hubapi.com";
pub const DEFAULT_POST_INSTALL_REDIRECT: &str = "https://app-na2.hubspot.com/";

#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub scopes: String,
    pub redirect_uri: String,
    pub server_host: String,
    pub server_port: u16,
    pub authorize_url: String,
    pub api_base_url: String,
    pub post_install_redirect: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// OAuth 相关变量缺失时不报错，留空字符串，由 HubSpot 端拒绝请求。
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Config {
            client_id: or("CLIENT_ID", ""),
            client_secret: or("CLIENT_SECRET", ""),
            scopes: or("SCOPES", ""),
            redirect_uri: or("REDIRECT_URI", ""),
            server_host: or("SERVER_HOST", "0.0.0.0"),
            server_port: lookup("SERVER_PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            authorize_url: or("HUBSPOT_AUTHORIZE_URL", DEFAULT_AUTHORIZE_URL),
            api_base_url: or("HUBSPOT_API_BASE", DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            post_install_redirect: or("POST_INSTALL_REDIRECT", DEFAULT_POST_INSTALL_REDIRECT),
        }
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth/v1/token", self.api_base_url)
    }

    /// 联系人接口地址，contact_id 只能占一个路径段
    ///
    /// 空值、`.`、`..` 返回 None；其余字符（含 `/`、`?`、`#`）按路径段编码。
    pub fn contact_url(&self, contact_id: &str) -> Option<Url> {
        if matches!(contact_id, "" | "." | "..") {
            return None;
        }
        let mut url = Url::parse(&self.api_base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["crm", "v3", "objects", "contacts", contact_id]);
        Some(url)
    }
}
