use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::auth::{password, CurrentUser};
use crate::courses::repo::Course;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validate::Rules;

use super::dto::{CreateUserRequest, ProfileResponse};
use super::repo::{NewUser, User};

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", get(current_user).post(create_user))
}

/// GET /api/users — the authenticated identity plus the courses it owns.
#[instrument(skip(state, user))]
async fn current_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let courses = Course::list_by_owner(&state.db, user.id).await?;
    Ok(Json(ProfileResponse {
        user: user.into(),
        courses: courses.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/users — validate, hash the password, insert, point Location
/// at the root. No body on success.
#[instrument(skip(state, body))]
async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut rules = Rules::new();
    rules
        .require("firstName", body.first_name.as_deref())
        .require("lastName", body.last_name.as_deref())
        .require("emailAddress", body.email_address.as_deref())
        .email("emailAddress", body.email_address.as_deref());
    let email = body.email_address.as_deref().unwrap_or("");
    if !email.trim().is_empty() {
        rules.fail_if(
            User::email_taken(&state.db, email).await?,
            "email already exists",
        );
    }
    rules.require("password", body.password.as_deref());
    rules.finish()?;

    let hash = password::hash_password(body.password.as_deref().unwrap_or_default())?;
    let user = User::create(
        &state.db,
        NewUser {
            first_name: body.first_name.unwrap_or_default(),
            last_name: body.last_name.unwrap_or_default(),
            email_address: body.email_address.unwrap_or_default(),
            password: hash,
        },
    )
    .await?;

    info!(user_id = user.id, email = %user.email_address, "user created");
    Ok((StatusCode::CREATED, [(header::LOCATION, "/")]))
}
