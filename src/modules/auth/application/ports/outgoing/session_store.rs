use crate::modules::auth::application::domain::entities::Principal;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session backend error: {0}")]
    Backend(String),
}

/// Server-side session records keyed by the hash of an opaque token.
///
/// The raw token only ever lives in the client cookie; the store sees a
/// digest, so a dumped session database cannot be replayed directly.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(
        &self,
        token_hash: &str,
        principal: &Principal,
        ttl_secs: u64,
    ) -> Result<(), SessionStoreError>;

    async fn get(&self, token_hash: &str) -> Result<Option<Principal>, SessionStoreError>;

    async fn delete(&self, token_hash: &str) -> Result<(), SessionStoreError>;
}
