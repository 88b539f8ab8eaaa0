use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AdminAuthRecord {
    pub id: Uuid,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Lookup and seeding for the admins table. Admins are never created through
/// the web surface, so a single port covers both directions.
#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAuthRecord>, AdminStoreError>;

    async fn insert_admin(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<Uuid, AdminStoreError>;
}
