// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use uuid::Uuid;

/// Result DTO for credential lookups; carries only what login needs.
#[derive(Debug, Clone)]
pub struct UserAuthRecord {
    pub id: Uuid,
    pub user_type: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAuthRecord>, UserQueryError>;
}
