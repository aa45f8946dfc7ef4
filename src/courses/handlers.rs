use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;
use crate::validate::Rules;

use super::dto::{CourseBody, CourseDetails};
use super::repo::Course;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/:id", get(get_course))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(create_course))
        .route("/courses/:id", put(update_course).delete(delete_course))
}

fn course_not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Course #{id} was not found"))
}

/// GET /api/courses — every course with its owner. An empty store is a
/// successful empty list, not a 404.
#[instrument(skip(state))]
async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseDetails>>, ApiError> {
    let courses = Course::list_with_owners(&state.db).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// GET /api/courses/:id
#[instrument(skip(state))]
async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CourseDetails>, ApiError> {
    match Course::find_with_owner(&state.db, id).await? {
        Some(course) => Ok(Json(course.into())),
        None => Err(course_not_found(id)),
    }
}

/// POST /api/courses — ownership comes from the credentials, never the
/// body. No route-level validation: an incomplete body is rejected by the
/// store's constraints.
#[instrument(skip(state, user, body))]
async fn create_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CourseBody>,
) -> Result<impl IntoResponse, ApiError> {
    let course = Course::create(&state.db, user.id, body.into()).await?;
    info!(course_id = course.id, user_id = user.id, "course created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/courses/{}", course.id))],
    ))
}

/// PUT /api/courses/:id — auth, then field rules, then existence, then
/// ownership.
#[instrument(skip(state, user, body))]
async fn update_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
    Json(body): Json<CourseBody>,
) -> Result<StatusCode, ApiError> {
    let mut rules = Rules::new();
    rules
        .require("title", body.title.as_deref())
        .require("description", body.description.as_deref());
    rules.finish()?;

    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| course_not_found(id))?;
    if course.user_id != user.id {
        return Err(ApiError::Forbidden(
            "You cannot update this course since you are not the owner.".into(),
        ));
    }

    Course::update(&state.db, id, body.into()).await?;
    info!(course_id = id, user_id = user.id, "course updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/courses/:id
#[instrument(skip(state, user))]
async fn delete_course(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let course = Course::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| course_not_found(id))?;
    if course.user_id != user.id {
        return Err(ApiError::Forbidden(
            "You cannot delete this course since you are not the owner.".into(),
        ));
    }

    Course::delete(&state.db, id).await?;
    info!(course_id = id, user_id = user.id, "course deleted");
    Ok(StatusCode::NO_CONTENT)
}
