use chrono::Utc;

use crate::{
    cache::{TokenCache, TokenRecord},
    error::{RelayError, UpstreamFailure},
    hubspot::HubSpotClient,
};

/// 返回当前可用的 access token，过期则先刷新
///
/// 刷新期间持有该标识的记录锁，同一标识的并发请求排队等待，
/// 拿到锁后重新判断过期，因此只会发出一次刷新请求。
/// 刷新失败时记录保持原样。
pub async fn ensure_valid_token(
    tokens: &TokenCache,
    hubspot: &HubSpotClient,
    identity: &str,
) -> Result<String, RelayError> {
    let slot = tokens.entry(identity).await.ok_or(RelayError::NotInstalled)?;
    let mut record = slot.lock().await;

    if !TokenCache::expired(&record, Utc::now()) {
        return Ok(record.access_token.clone());
    }

    tracing::info!("Access token for {} expired, refreshing", identity);
    let refreshed = hubspot
        .refresh(&record.refresh_token)
        .await
        .map_err(RelayError::RefreshFailed)?;

    record.renew(refreshed.access_token, refreshed.expires_in, Utc::now());
    tracing::debug!("Access token for {} valid until {}", identity, record.expires_at);

    Ok(record.access_token.clone())
}

/// 用授权码换取令牌并写入缓存
pub async fn install(
    tokens: &TokenCache,
    hubspot: &HubSpotClient,
    identity: &str,
    code: &str,
) -> Result<(), RelayError> {
    let issued = hubspot
        .exchange_code(code)
        .await
        .map_err(RelayError::ExchangeFailed)?;

    let refresh_token = issued.refresh_token.ok_or_else(|| {
        RelayError::ExchangeFailed(UpstreamFailure::Transport(
            "token response is missing refresh_token".into(),
        ))
    })?;

    let record = TokenRecord::issued(
        issued.access_token,
        refresh_token,
        issued.expires_in,
        Utc::now(),
    );
    tokens.put(identity, record).await;

    Ok(())
}
