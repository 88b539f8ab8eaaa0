use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::session_store::{
    SessionStore, SessionStoreError,
};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

/// Redis-backed implementation of `SessionStore`.
///
/// ## Redis data model
///
/// ```text
/// auth:session:{token_hash} -> JSON-serialized Principal
/// ```
///
/// - Exists ⇒ the session is live
/// - TTL = session lifetime; Redis expiry is the single source of truth
///   for cleanup, so logout-less abandoned sessions disappear on their own.
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(token_hash: &str) -> String {
        format!("auth:session:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(
        &self,
        token_hash: &str,
        principal: &Principal,
        ttl_secs: u64,
    ) -> Result<(), SessionStoreError> {
        let payload = serde_json::to_string(principal)
            .map_err(|e| SessionStoreError::Backend(format!("Serialize error: {}", e)))?;

        let mut conn = self.get_conn().await?;
        conn.set_ex::<_, _, ()>(Self::session_key(token_hash), payload, ttl_secs)
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Redis error: {}", e)))?;

        Ok(())
    }

    async fn get(&self, token_hash: &str) -> Result<Option<Principal>, SessionStoreError> {
        let mut conn = self.get_conn().await?;
        let payload: Option<String> = conn
            .get(Self::session_key(token_hash))
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Redis error: {}", e)))?;

        match payload {
            // A record we wrote but cannot parse is treated as no session.
            Some(json) => Ok(serde_json::from_str(&json).ok()),
            None => Ok(None),
        }
    }

    async fn delete(&self, token_hash: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;
        conn.del::<_, ()>(Self::session_key(token_hash))
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Redis error: {}", e)))?;

        Ok(())
    }
}
