use actix_web::cookie::Cookie;
use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::services::session::{SessionService, SESSION_COOKIE};
use crate::tests::support::stubs::InMemorySessionStore;

/// A fresh in-memory session service, ready to hand to `App::app_data`.
pub fn data_sessions() -> web::Data<Arc<SessionService>> {
    web::Data::new(Arc::new(SessionService::new(
        Arc::new(InMemorySessionStore::default()),
        3600,
    )))
}

pub async fn user_session_cookie(
    sessions: &web::Data<Arc<SessionService>>,
    user_id: Uuid,
) -> Cookie<'static> {
    let token = sessions
        .issue(&Principal::User {
            user_id,
            user_type: "Individual".to_string(),
        })
        .await
        .expect("session issue should not fail in tests");
    Cookie::new(SESSION_COOKIE, token)
}

pub async fn admin_session_cookie(
    sessions: &web::Data<Arc<SessionService>>,
    admin_id: Uuid,
) -> Cookie<'static> {
    let token = sessions
        .issue(&Principal::Admin { admin_id })
        .await
        .expect("session issue should not fail in tests");
    Cookie::new(SESSION_COOKIE, token)
}
