use crate::modules::auth::application::ports::outgoing::admin_store::AdminStore;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_ROLE: &str = "SuperAdmin";

#[derive(Debug, Clone)]
pub enum SeedAdminError {
    HashingFailed(String),
    RepositoryError(String),
}

#[async_trait]
pub trait ISeedAdminUseCase: Send + Sync {
    /// Returns true when a fresh superadmin row was inserted.
    async fn execute(&self, seed_password: &str) -> Result<bool, SeedAdminError>;
}

/// Startup seeding: ensure the default superadmin exists. Idempotent, so it
/// runs unconditionally on every boot.
pub struct SeedAdminUseCase<A>
where
    A: AdminStore + Send + Sync,
{
    admins: A,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<A> SeedAdminUseCase<A>
where
    A: AdminStore + Send + Sync,
{
    pub fn new(admins: A, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            admins,
            password_hasher,
        }
    }
}

#[async_trait]
impl<A> ISeedAdminUseCase for SeedAdminUseCase<A>
where
    A: AdminStore + Send + Sync,
{
    async fn execute(&self, seed_password: &str) -> Result<bool, SeedAdminError> {
        let existing = self
            .admins
            .find_by_username(DEFAULT_ADMIN_USERNAME)
            .await
            .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Ok(false);
        }

        let password_hash = self
            .password_hasher
            .hash_password(seed_password)
            .await
            .map_err(|e| SeedAdminError::HashingFailed(e.to_string()))?;

        self.admins
            .insert_admin(DEFAULT_ADMIN_USERNAME, &password_hash, DEFAULT_ADMIN_ROLE)
            .await
            .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?;

        info!(username = DEFAULT_ADMIN_USERNAME, "Seeded default superadmin");
        Ok(true)
    }
}
