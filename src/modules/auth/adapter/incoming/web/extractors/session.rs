use actix_web::{
    dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::services::session::{SessionService, SESSION_COOKIE};
use crate::shared::api::ApiResponse;

/// An authenticated requesting user, resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub user_id: Uuid,
    pub user_type: String,
}

/// An authenticated admin, resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: Uuid,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Role-gated pages bounce anonymous (or wrong-role) callers to the login
/// page rather than answering with data.
fn login_redirect() -> ActixError {
    create_api_error(ApiResponse::see_other("/login"))
}

async fn resolve_principal(req: HttpRequest) -> Result<Principal, ActixError> {
    let sessions = match req.app_data::<web::Data<Arc<SessionService>>>() {
        Some(service) => Arc::clone(service.get_ref()),
        None => {
            return Err(create_api_error(ApiResponse::internal_error()));
        }
    };

    let token = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Err(login_redirect()),
    };

    match sessions.resolve(&token).await {
        Ok(Some(principal)) => Ok(principal),
        Ok(None) => Err(login_redirect()),
        Err(_) => Err(create_api_error(ApiResponse::internal_error())),
    }
}

impl FromRequest for UserSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve_principal(req).await? {
                Principal::User { user_id, user_type } => Ok(UserSession { user_id, user_type }),
                Principal::Admin { .. } => Err(login_redirect()),
            }
        })
    }
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve_principal(req).await? {
                Principal::Admin { admin_id } => Ok(AdminSession { admin_id }),
                Principal::User { .. } => Err(login_redirect()),
            }
        })
    }
}
