use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Detail of an unexpected failure, stashed on the response so the logging
/// layer can pick it up. Never serialized into a body.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Every error response the API produces goes through this enum.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Credentials missing, unknown or wrong. The concrete reason is only
    /// ever logged; callers get the same generic denial either way.
    #[error("Access Denied")]
    Unauthenticated,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    /// All violated field rules of one request, in declaration order.
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.code().as_deref() {
                // not-null violation: a mutation reached the store with a
                // required column absent
                Some("23502") => {
                    let column = db_err
                        .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                        .and_then(|pg| pg.column())
                        .unwrap_or("field")
                        .to_string();
                    return ApiError::Validation(vec![format!("{column} cannot be null")]);
                }
                // unique violation: the only unique constraint is the email
                Some("23505") => {
                    return ApiError::Validation(vec!["email already exists".to_string()]);
                }
                _ => {}
            }
        }
        ApiError::Unexpected(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Access Denied" })),
            )
                .into_response(),
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": message }))).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::Unexpected(err) => {
                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": err.to_string() })),
                )
                    .into_response();
                response
                    .extensions_mut()
                    .insert(ErrorDetail(format!("{err:#}")));
                response
            }
        }
    }
}
