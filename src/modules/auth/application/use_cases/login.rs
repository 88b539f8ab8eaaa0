use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::admin_store::AdminStore;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::auth::application::services::session::SessionService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Which credential table to authenticate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRole {
    User,
    Admin,
}

impl LoginRole {
    /// The login form defaults to a user login when the role field is
    /// absent or unrecognized.
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value {
            Some("admin") => LoginRole::Admin,
            _ => LoginRole::User,
        }
    }
}

#[derive(Debug, Clone)]
pub enum LoginError {
    /// Deliberately covers both "unknown username" and "wrong password".
    InvalidCredentials,
    VerificationFailed(String),
    SessionFailed(String),
    QueryError(String),
}

/// A live session plus who it belongs to.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub principal: Principal,
    pub display_name: String,
}

#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(
        &self,
        role: LoginRole,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, LoginError>;
}

pub struct LoginUseCase<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: AdminStore + Send + Sync,
{
    users: Q,
    admins: A,
    password_hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<SessionService>,
}

impl<Q, A> LoginUseCase<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: AdminStore + Send + Sync,
{
    pub fn new(
        users: Q,
        admins: A,
        password_hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<SessionService>,
    ) -> Self {
        Self {
            users,
            admins,
            password_hasher,
            sessions,
        }
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, LoginError> {
        self.password_hasher
            .verify_password(password, hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q, A> ILoginUseCase for LoginUseCase<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: AdminStore + Send + Sync,
{
    async fn execute(
        &self,
        role: LoginRole,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, LoginError> {
        let (principal, display_name, password_hash) = match role {
            LoginRole::Admin => {
                let admin = self
                    .admins
                    .find_by_username(username)
                    .await
                    .map_err(|e| LoginError::QueryError(e.to_string()))?
                    .ok_or(LoginError::InvalidCredentials)?;

                (
                    Principal::Admin { admin_id: admin.id },
                    username.to_string(),
                    admin.password_hash,
                )
            }
            LoginRole::User => {
                let user = self
                    .users
                    .find_by_username(username)
                    .await
                    .map_err(|e| LoginError::QueryError(e.to_string()))?
                    .ok_or(LoginError::InvalidCredentials)?;

                (
                    Principal::User {
                        user_id: user.id,
                        user_type: user.user_type,
                    },
                    user.name,
                    user.password_hash,
                )
            }
        };

        if !self.verify(password, &password_hash).await? {
            warn!(username = %username, "Password mismatch on login");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .sessions
            .issue(&principal)
            .await
            .map_err(|e| LoginError::SessionFailed(e.to_string()))?;

        Ok(LoginOutcome {
            token,
            principal,
            display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::admin_store::{
        AdminAuthRecord, AdminStoreError,
    };
    use crate::modules::auth::application::ports::outgoing::password_hasher::HashError;
    use crate::modules::auth::application::ports::outgoing::session_store::{
        SessionStore, SessionStoreError,
    };
    use crate::modules::auth::application::ports::outgoing::user_query::{
        UserAuthRecord, UserQueryError,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct MockUserQuery {
        user: Option<UserAuthRecord>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<UserAuthRecord>, UserQueryError> {
            Ok(self.user.clone().filter(|_| username == "alice"))
        }
    }

    #[derive(Default)]
    struct MockAdminStore {
        admin: Option<AdminAuthRecord>,
    }

    #[async_trait]
    impl AdminStore for MockAdminStore {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<AdminAuthRecord>, AdminStoreError> {
            Ok(self.admin.clone().filter(|_| username == "admin"))
        }

        async fn insert_admin(
            &self,
            _username: &str,
            _password_hash: &str,
            _role: &str,
        ) -> Result<Uuid, AdminStoreError> {
            unimplemented!()
        }
    }

    /// Accepts exactly one password, rejects everything else.
    struct FixedPasswordHasher {
        accepted: &'static str,
    }

    #[async_trait]
    impl PasswordHasher for FixedPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hash".to_string())
        }

        async fn verify_password(&self, password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(password == self.accepted)
        }
    }

    #[derive(Default)]
    struct InMemorySessionStore {
        entries: Mutex<HashMap<String, Principal>>,
    }

    #[async_trait]
    impl SessionStore for InMemorySessionStore {
        async fn put(
            &self,
            token_hash: &str,
            principal: &Principal,
            _ttl_secs: u64,
        ) -> Result<(), SessionStoreError> {
            self.entries
                .lock()
                .unwrap()
                .insert(token_hash.to_string(), principal.clone());
            Ok(())
        }

        async fn get(&self, token_hash: &str) -> Result<Option<Principal>, SessionStoreError> {
            Ok(self.entries.lock().unwrap().get(token_hash).cloned())
        }

        async fn delete(&self, token_hash: &str) -> Result<(), SessionStoreError> {
            self.entries.lock().unwrap().remove(token_hash);
            Ok(())
        }
    }

    fn sessions() -> Arc<SessionService> {
        Arc::new(SessionService::new(
            Arc::new(InMemorySessionStore::default()),
            3600,
        ))
    }

    fn user_record() -> UserAuthRecord {
        UserAuthRecord {
            id: Uuid::new_v4(),
            user_type: "Individual".to_string(),
            name: "Alice".to_string(),
            password_hash: "stored-hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_login_success_establishes_session() {
        // Arrange
        let sessions = sessions();
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(user_record()),
            },
            MockAdminStore::default(),
            Arc::new(FixedPasswordHasher {
                accepted: "correct-horse",
            }),
            Arc::clone(&sessions),
        );

        // Act
        let outcome = use_case
            .execute(LoginRole::User, "alice", "correct-horse")
            .await
            .expect("login should succeed");

        // Assert: the issued token resolves back to the user principal
        let resolved = sessions.resolve(&outcome.token).await.unwrap();
        assert_eq!(resolved, Some(outcome.principal.clone()));
        assert!(matches!(outcome.principal, Principal::User { .. }));
        assert_eq!(outcome.display_name, "Alice");
    }

    #[tokio::test]
    async fn test_user_login_wrong_password() {
        // Arrange
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(user_record()),
            },
            MockAdminStore::default(),
            Arc::new(FixedPasswordHasher {
                accepted: "correct-horse",
            }),
            sessions(),
        );

        // Act
        let result = use_case.execute(LoginRole::User, "alice", "wrong").await;

        // Assert
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_unknown_username_is_indistinguishable_from_wrong_password() {
        // Arrange
        let use_case = LoginUseCase::new(
            MockUserQuery::default(),
            MockAdminStore::default(),
            Arc::new(FixedPasswordHasher { accepted: "any" }),
            sessions(),
        );

        // Act
        let result = use_case.execute(LoginRole::User, "nobody", "any").await;

        // Assert
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_admin_login_uses_admin_table() {
        // Arrange
        let admin_id = Uuid::new_v4();
        let use_case = LoginUseCase::new(
            MockUserQuery::default(),
            MockAdminStore {
                admin: Some(AdminAuthRecord {
                    id: admin_id,
                    password_hash: "stored-hash".to_string(),
                }),
            },
            Arc::new(FixedPasswordHasher {
                accepted: "admin123",
            }),
            sessions(),
        );

        // Act
        let outcome = use_case
            .execute(LoginRole::Admin, "admin", "admin123")
            .await
            .expect("admin login should succeed");

        // Assert
        assert_eq!(outcome.principal, Principal::Admin { admin_id });
    }

    #[tokio::test]
    async fn test_user_credentials_do_not_open_admin_session() {
        // Arrange: no admin row exists, only a user named alice
        let use_case = LoginUseCase::new(
            MockUserQuery {
                user: Some(user_record()),
            },
            MockAdminStore::default(),
            Arc::new(FixedPasswordHasher {
                accepted: "correct-horse",
            }),
            sessions(),
        );

        // Act
        let result = use_case
            .execute(LoginRole::Admin, "alice", "correct-horse")
            .await;

        // Assert
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[test]
    fn test_role_parsing_defaults_to_user() {
        assert_eq!(LoginRole::from_form_value(None), LoginRole::User);
        assert_eq!(LoginRole::from_form_value(Some("user")), LoginRole::User);
        assert_eq!(LoginRole::from_form_value(Some("admin")), LoginRole::Admin);
        assert_eq!(LoginRole::from_form_value(Some("other")), LoginRole::User);
    }
}
