use serde::Deserialize;

/// 回调未带 hub_id 时使用的安装标识
pub const DEFAULT_IDENTITY: &str = "default";

pub(super) const WELCOME_PAGE: &str = r#"
<h1>HubSpot SMS App Backend</h1>
<p>Server is running!</p>
<p><a href="/install">Click here to install the app</a></p>
"#;

/// GET /?code=..&hub_id=..
#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub hub_id: Option<String>,
}

impl CallbackQuery {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }

    /// 以 hub_id（portal id）作为安装标识
    pub fn identity(&self) -> &str {
        self.hub_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_IDENTITY)
    }
}
