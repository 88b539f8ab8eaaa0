use crate::modules::auth::application::services::session::SessionService;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum LogoutError {
    SessionFailed(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

pub struct LogoutUseCase {
    sessions: Arc<SessionService>,
}

impl LogoutUseCase {
    pub fn new(sessions: Arc<SessionService>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        self.sessions
            .revoke(token)
            .await
            .map_err(|e| LogoutError::SessionFailed(e.to_string()))
    }
}
