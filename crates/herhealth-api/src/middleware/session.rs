use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use herhealth_core::keys;
use herhealth_flow::session::SessionProvider;

use crate::error::ApiError;

pub const USER_HEADER: &str = "x-user-id";

/// Session extraction middleware.
///
/// The backend's auth layer sits in front of this service and forwards the
/// signed-in user's id in `x-user-id`. The header is trusted as an identity,
/// but an id that cannot be used as a storage key segment is a bad request.
/// A missing or blank header means an anonymous session.
pub async fn current_user(mut req: Request, next: Next) -> Response {
    let user_id = req
        .headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    if let Some(Err(e)) = user_id.as_deref().map(keys::check_user_id) {
        return ApiError::from(e).into_response();
    }

    req.extensions_mut().insert(CurrentUser { user_id });

    next.run(req).await
}

/// Session identity extracted from request headers.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser {
    pub user_id: Option<String>,
}

impl SessionProvider for CurrentUser {
    fn current_user(&self) -> Option<String> {
        self.user_id.clone()
    }
}
