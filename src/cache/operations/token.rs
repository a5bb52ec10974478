use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::cache::models::token::TokenRecord;

/// 按安装标识（portal id）索引的令牌缓存
///
/// 每条记录有独立的锁：刷新期间只阻塞同一标识的请求。
/// 没有容量上限和淘汰策略。
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    slots: Arc<RwLock<HashMap<String, Arc<Mutex<TokenRecord>>>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取记录快照
    pub async fn get(&self, identity: &str) -> Option<TokenRecord> {
        let slot = self.entry(identity).await?;
        let record = slot.lock().await.clone();
        Some(record)
    }

    /// 写入记录，已存在时整体替换
    pub async fn put(&self, identity: impl Into<String>, record: TokenRecord) {
        let mut slots = self.slots.write().await;
        slots.insert(identity.into(), Arc::new(Mutex::new(record)));
    }

    pub fn expired(record: &TokenRecord, now: DateTime<Utc>) -> bool {
        record.is_expired_at(now)
    }

    /// 获取可加锁的记录槽位，供刷新流程原地修改
    pub async fn entry(&self, identity: &str) -> Option<Arc<Mutex<TokenRecord>>> {
        let slots = self.slots.read().await;
        slots.get(identity).cloned()
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}
