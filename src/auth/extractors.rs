use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::warn;

use crate::auth::{basic, password};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Resolves Basic-Auth credentials to the stored user and hands the row to
/// the handler. Every rejection is the same generic 401; the concrete
/// reason is only logged.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(basic::parse);

        let Some(credentials) = credentials else {
            warn!("auth header not found");
            return Err(ApiError::Unauthenticated);
        };

        let user = match User::find_by_email(&state.db, &credentials.username).await? {
            Some(user) => user,
            None => {
                warn!(email = %credentials.username, "user not found for username");
                return Err(ApiError::Unauthenticated);
            }
        };

        if !password::verify_password(&credentials.password, &user.password)? {
            warn!(email = %credentials.username, "authentication failure for username");
            return Err(ApiError::Unauthenticated);
        }

        Ok(CurrentUser(user))
    }
}
