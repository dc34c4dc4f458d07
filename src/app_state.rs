//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use axum::extract::FromRef;

use crate::stores::StudentStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: StudentStore + Send + Sync,
{
    /// The store for managing [student](crate::models::Student) records.
    pub student_store: S,
}

impl<S> AppState<S>
where
    S: StudentStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(student_store: S) -> Self {
        Self { student_store }
    }
}

/// The state needed to get or create student records.
#[derive(Debug, Clone)]
pub struct StudentState<S>
where
    S: StudentStore + Send + Sync,
{
    /// The store for managing [student](crate::models::Student) records.
    pub student_store: S,
}

impl<S> FromRef<AppState<S>> for StudentState<S>
where
    S: StudentStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            student_store: state.student_store.clone(),
        }
    }
}
