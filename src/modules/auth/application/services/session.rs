use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::session_store::{
    SessionStore, SessionStoreError,
};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;

/// Cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "fb_session";

const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Session backend error: {0}")]
    Backend(String),
}

impl From<SessionStoreError> for SessionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::Backend(msg) => SessionError::Backend(msg),
        }
    }
}

/// The capability through which every handler learns who is calling.
///
/// Issues opaque tokens, resolves them back to a [`Principal`], and revokes
/// them on logout. Tokens are hashed before they are used as store keys.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    ttl_secs: u64,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, ttl_secs: u64) -> Self {
        Self { store, ttl_secs }
    }

    /// Create a session for `principal` and return the raw token destined
    /// for the client cookie.
    pub async fn issue(&self, principal: &Principal) -> Result<String, SessionError> {
        let token = generate_token();
        self.store
            .put(&hash_token(&token), principal, self.ttl_secs)
            .await?;
        Ok(token)
    }

    /// Resolve a raw token back to its principal. `None` means the token is
    /// unknown or expired.
    pub async fn resolve(&self, token: &str) -> Result<Option<Principal>, SessionError> {
        Ok(self.store.get(&hash_token(token)).await?)
    }

    pub async fn revoke(&self, token: &str) -> Result<(), SessionError> {
        Ok(self.store.delete(&hash_token(token)).await?)
    }
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Never store raw tokens in the session backend.
fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
