use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    NewUser, UserRepository, UserRepositoryError,
};
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

// Possible errors for registering a user
#[derive(Debug, Clone)]
pub enum RegisterUserError {
    InvalidEmail,
    WeakPassword(PasswordPolicyError),
    UsernameTaken,
    EmailTaken,
    HashingFailed(String),
    RepositoryError(String),
}

/// Raw signup form data, already shaped but not yet validated.
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub user_type: String,
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub proof_type: Option<String>,
    pub proof_number: Option<String>,
    pub username: String,
    pub password: String,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_policy: Arc<dyn PasswordPolicy>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        password_policy: Arc<dyn PasswordPolicy>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            repository,
            password_policy,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        if email_address::EmailAddress::from_str(&input.email).is_err() {
            return Err(RegisterUserError::InvalidEmail);
        }

        self.password_policy
            .validate(&input.password)
            .map_err(RegisterUserError::WeakPassword)?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // Uniqueness is the insert's problem: the unique constraints on
        // username and email fail the statement, and no cleanup is needed.
        let created = self
            .repository
            .create_user(NewUser {
                user_type: input.user_type,
                name: input.name,
                contact_number: input.contact_number,
                email: input.email,
                address: input.address,
                proof_type: input.proof_type,
                proof_number: input.proof_number,
                username: input.username,
                password_hash,
            })
            .await;

        match created {
            Ok(user) => Ok(user),
            Err(UserRepositoryError::UsernameTaken) => Err(RegisterUserError::UsernameTaken),
            Err(UserRepositoryError::EmailTaken) => Err(RegisterUserError::EmailTaken),
            Err(UserRepositoryError::DatabaseError(e)) => {
                Err(RegisterUserError::RepositoryError(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::modules::auth::application::services::password::BasicPasswordPolicy;
    use chrono::Utc;
    use uuid::Uuid;

    #[derive(Default)]
    struct MockUserRepository {
        taken_username: Option<String>,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
            if self.taken_username.as_deref() == Some(user.username.as_str()) {
                return Err(UserRepositoryError::UsernameTaken);
            }
            Ok(User {
                id: Uuid::new_v4(),
                user_type: user.user_type,
                name: user.name,
                contact_number: user.contact_number,
                email: user.email,
                address: user.address,
                proof_type: user.proof_type,
                proof_number: user.proof_number,
                username: user.username,
                password_hash: user.password_hash,
                created_at: Utc::now(),
            })
        }
    }

    struct MockPasswordHasher;

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    fn sample_input() -> RegisterUserInput {
        RegisterUserInput {
            user_type: "Individual".to_string(),
            name: "Alice".to_string(),
            contact_number: "555-0101".to_string(),
            email: "alice@example.com".to_string(),
            address: "12 Main St".to_string(),
            proof_type: Some("RationCard".to_string()),
            proof_number: Some("RC-42".to_string()),
            username: "alice".to_string(),
            password: "a-decent-password".to_string(),
        }
    }

    fn use_case(repository: MockUserRepository) -> RegisterUserUseCase<MockUserRepository> {
        RegisterUserUseCase::new(
            repository,
            Arc::new(BasicPasswordPolicy),
            Arc::new(MockPasswordHasher),
        )
    }

    #[tokio::test]
    async fn test_register_user_success() {
        // Arrange
        let use_case = use_case(MockUserRepository::default());

        // Act
        let result = use_case.execute(sample_input()).await;

        // Assert
        assert!(result.is_ok(), "Expected registration to succeed");
        let user = result.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, "hashed_password");
    }

    #[tokio::test]
    async fn test_register_user_duplicate_username() {
        // Arrange
        let use_case = use_case(MockUserRepository {
            taken_username: Some("alice".to_string()),
        });

        // Act
        let result = use_case.execute(sample_input()).await;

        // Assert
        assert!(matches!(result, Err(RegisterUserError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_register_user_invalid_email() {
        // Arrange
        let use_case = use_case(MockUserRepository::default());
        let mut input = sample_input();
        input.email = "not-an-email".to_string();

        // Act
        let result = use_case.execute(input).await;

        // Assert
        assert!(matches!(result, Err(RegisterUserError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_register_user_weak_password() {
        // Arrange
        let use_case = use_case(MockUserRepository::default());
        let mut input = sample_input();
        input.password = "short".to_string();

        // Act
        let result = use_case.execute(input).await;

        // Assert
        assert!(matches!(
            result,
            Err(RegisterUserError::WeakPassword(PasswordPolicyError::TooShort))
        ));
    }

    #[tokio::test]
    async fn test_register_user_hashing_failure_surfaces() {
        // Arrange
        struct FailingHasher;

        #[async_trait]
        impl PasswordHasher for FailingHasher {
            async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
                Err(HashError::HashFailed)
            }

            async fn verify_password(
                &self,
                _password: &str,
                _hash: &str,
            ) -> Result<bool, HashError> {
                Ok(false)
            }
        }

        let use_case = RegisterUserUseCase::new(
            MockUserRepository::default(),
            Arc::new(BasicPasswordPolicy),
            Arc::new(FailingHasher),
        );

        // Act
        let result = use_case.execute(sample_input()).await;

        // Assert
        assert!(matches!(result, Err(RegisterUserError::HashingFailed(_))));
    }
}
