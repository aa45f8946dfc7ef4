use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::error::{ApiError, ErrorDetail};
use crate::state::AppState;
use crate::{courses, users};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest(
            "/api",
            Router::new()
                .merge(users::router())
                .merge(courses::router()),
        )
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            log_unexpected,
        ))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the REST API project!" }))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route Not Found".into())
}

/// Surfaces the detail of unexpected failures when the config toggle is
/// on. The detail rides a response extension and never reaches a body.
async fn log_unexpected(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if state.config.log_unexpected_errors {
        if let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>() {
            error!(%detail, "unhandled error");
        }
    }
    response
}
