//! This module defines the domain data types.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;

/// A student record.
///
/// Students are created through the create endpoint and never mutated
/// afterwards. Every persisted student has all four text fields non-empty
/// and an email address that no other student shares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    /// The ID of the student, assigned by the database on insert.
    pub id: DatabaseID,

    /// The student's full name.
    pub name: String,

    /// The student's email address.
    pub email: String,

    /// The grade the student is enrolled in.
    pub grade: String,

    /// The student's roll number.
    #[serde(rename = "rollNumber")]
    pub roll_number: String,
}

/// The data for creating a student, before the database has assigned an ID.
///
/// All fields default to the empty string when absent from the request body
/// so that partial payloads reach the validation step instead of being
/// rejected by the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStudent {
    /// The student's full name.
    #[serde(default)]
    pub name: String,

    /// The student's email address.
    #[serde(default)]
    pub email: String,

    /// The grade the student is enrolled in.
    #[serde(default)]
    pub grade: String,

    /// The student's roll number.
    #[serde(default, rename = "rollNumber")]
    pub roll_number: String,
}

impl NewStudent {
    /// Check that every required field is non-empty.
    ///
    /// # Errors
    /// Returns [Error::MissingRequiredField] if any of the name, email,
    /// grade or roll number is empty. The error does not report which
    /// field(s) were missing.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.grade.is_empty()
            || self.roll_number.is_empty()
        {
            return Err(Error::MissingRequiredField);
        }

        Ok(())
    }
}
