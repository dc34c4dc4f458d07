//! Defines the endpoint for creating a new student record.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::StudentState,
    models::{NewStudent, Student},
    stores::StudentStore,
};

/// A route handler for creating a new student record.
///
/// Responds with 201 and the persisted record on success, or 400 and a
/// field-keyed error map when a required field is missing or the email is
/// already taken.
pub async fn create_student_endpoint<S>(
    State(state): State<StudentState<S>>,
    Json(new_student): Json<NewStudent>,
) -> Response
where
    S: StudentStore + Clone + Send + Sync,
{
    match create_student(new_student, &state.student_store) {
        Ok(student) => (StatusCode::CREATED, Json(student)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Validate `new_student` and insert it into `store`.
///
/// The store is not written to unless validation and the duplicate email
/// check both pass.
fn create_student<S>(new_student: NewStudent, store: &S) -> Result<Student, Error>
where
    S: StudentStore,
{
    new_student.validate()?;

    match store.get_by_email(&new_student.email) {
        Ok(_) => return Err(Error::DuplicateEmail),
        Err(Error::NotFound) => {}
        Err(error) => return Err(error),
    }

    store.create(new_student)
}


#[cfg(test)]
mod create_student_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{build_router, endpoints, stores::sqlite::create_app_state};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(connection).expect("Could not create app state.");
        let app = build_router(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn create_student_succeeds() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CREATE_STUDENT)
            .json(&json!({
                "name": "Alice",
                "email": "alice@example.com",
                "grade": "A",
                "rollNumber": "101"
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        assert_eq!(response.header("content-type"), "application/json");

        let student: Value = response.json();
        assert!(student["id"].as_i64().is_some());
        assert_eq!(student["name"], "Alice");
        assert_eq!(student["email"], "alice@example.com");
        assert_eq!(student["grade"], "A");
        assert_eq!(student["rollNumber"], "101");
    }

    #[tokio::test]
    async fn create_student_fails_with_missing_fields() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CREATE_STUDENT)
            .json(&json!({ "email": "noName@example.com" }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "name": "Required field is missing" }));
    }

    #[tokio::test]
    async fn create_student_fails_with_empty_fields() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CREATE_STUDENT)
            .json(&json!({
                "name": "",
                "email": "alice@example.com",
                "grade": "",
                "rollNumber": ""
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "name": "Required field is missing" }));
    }

    #[tokio::test]
    async fn create_student_fails_with_duplicate_email() {
        let server = get_test_server();

        server
            .post(endpoints::CREATE_STUDENT)
            .json(&json!({
                "name": "John",
                "email": "john@example.com",
                "grade": "A",
                "rollNumber": "101"
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .post(endpoints::CREATE_STUDENT)
            .json(&json!({
                "name": "Jane",
                "email": "john@example.com",
                "grade": "B",
                "rollNumber": "102"
            }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&json!({ "email": "Email already exists" }));
    }
}
