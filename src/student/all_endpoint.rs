//! Defines the endpoint for listing every student record.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::StudentState, stores::StudentStore};

/// A route handler that returns every student in the store as a JSON array.
///
/// The order of the records is whatever the store returns.
pub async fn get_all_students_endpoint<S>(State(state): State<StudentState<S>>) -> Response
where
    S: StudentStore + Clone + Send + Sync,
{
    match state.student_store.get_all() {
        Ok(students) => (StatusCode::OK, Json(students)).into_response(),
        Err(error) => error.into_response(),
    }
}
