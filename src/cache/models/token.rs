use chrono::{DateTime, TimeDelta, Utc};

/// 单个安装（portal）的令牌记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenRecord {
    pub fn issued(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at: expiry_after(now, expires_in),
        }
    }

    /// 刷新后只替换 access token 和过期时间，refresh token 保持不变
    pub fn renew(&mut self, access_token: String, expires_in: i64, now: DateTime<Utc>) {
        self.access_token = access_token;
        self.expires_at = expiry_after(now, expires_in);
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

// expires_in 异常（溢出）时视为立即过期
fn expiry_after(now: DateTime<Utc>, expires_in: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(expires_in)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(now)
}
