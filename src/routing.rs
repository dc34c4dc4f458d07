//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    stores::StudentStore,
    student::{create_student_endpoint, get_all_students_endpoint, get_student_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: StudentStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::CREATE_STUDENT, post(create_student_endpoint::<S>))
        .route(endpoints::ALL_STUDENTS, get(get_all_students_endpoint::<S>))
        .route(endpoints::STUDENT, get(get_student_endpoint::<S>))
        .layer(middleware::from_fn(logging_middleware))
        .fallback(get_unknown_route)
        .with_state(state)
}

/// The fallback for requests that match no route.
async fn get_unknown_route() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "the requested resource could not be found" })),
    )
        .into_response()
}
