//! Defines the student store trait.

use crate::{
    Error,
    models::{DatabaseID, NewStudent, Student},
};

/// Creates and retrieves student records.
///
/// The store owns ID assignment and enforces email uniqueness at the
/// storage level, so a concurrent insert cannot bypass the duplicate
/// email check done by the create workflow.
pub trait StudentStore {
    /// Insert a new student into the store and return the stored record
    /// with its assigned ID.
    fn create(&self, new_student: NewStudent) -> Result<Student, Error>;

    /// Get a student by their ID.
    fn get(&self, student_id: DatabaseID) -> Result<Student, Error>;

    /// Get a student by their email address.
    fn get_by_email(&self, email: &str) -> Result<Student, Error>;

    /// Get every student in the store, in no particular order.
    fn get_all(&self) -> Result<Vec<Student>, Error>;
}
