use crate::modules::auth::application::domain::entities::User;
use async_trait::async_trait;
use std::fmt;

/// Everything needed to insert a user row; the id and creation timestamp
/// are assigned by the adapter.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_type: String,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub proof_type: Option<String>,
    pub proof_number: Option<String>,
    pub username: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
}

#[derive(Debug)]
pub enum UserRepositoryError {
    UsernameTaken,
    EmailTaken,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UsernameTaken => write!(f, "Username already taken"),
            UserRepositoryError::EmailTaken => write!(f, "Email already registered"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
