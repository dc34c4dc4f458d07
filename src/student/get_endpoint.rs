//! Defines the endpoint for looking up a single student record by ID.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{app_state::StudentState, models::DatabaseID, stores::StudentStore};

/// A route handler that returns the student with the ID in the request path.
///
/// Responds with 200 and the record when it exists, or 404 and an error map
/// keyed by `id` when it does not.
pub async fn get_student_endpoint<S>(
    State(state): State<StudentState<S>>,
    Path(student_id): Path<DatabaseID>,
) -> Response
where
    S: StudentStore + Clone + Send + Sync,
{
    match state.student_store.get(student_id) {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod get_student_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        build_router,
        endpoints::{self, format_endpoint},
        stores::sqlite::create_app_state,
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(connection).expect("Could not create app state.");
        let app = build_router(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn returns_created_student_by_id() {
        let server = get_test_server();

        let created: Value = server
            .post(endpoints::CREATE_STUDENT)
            .json(&json!({
                "name": "Charlie",
                "email": "charlie@example.com",
                "grade": "C",
                "rollNumber": "103"
            }))
            .await
            .json();
        let id = created["id"].as_i64().expect("expected an assigned id");

        let response = server.get(&format_endpoint(endpoints::STUDENT, id)).await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/json");
        // The fetched record matches the created one field for field.
        response.assert_json(&created);
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_id() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::STUDENT, 999_999))
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "id": "Student not found" }));
    }
}
