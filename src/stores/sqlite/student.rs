//! Implements a SQLite backed student store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, NewStudent, Student},
    stores::StudentStore,
};

/// Handles the creation and retrieval of student records.
#[derive(Debug, Clone)]
pub struct SQLiteStudentStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteStudentStore {
    /// Create a new student store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl StudentStore for SQLiteStudentStore {
    /// Insert a new student into the database.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns a [Error::DuplicateEmail] if the email is already in the
    /// database, or a [Error::SqlError] if an SQL related error occurred.
    fn create(&self, new_student: NewStudent) -> Result<Student, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO student (name, email, grade, roll_number) VALUES (?1, ?2, ?3, ?4)",
            (
                &new_student.name,
                &new_student.email,
                &new_student.grade,
                &new_student.roll_number,
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Student {
            id,
            name: new_student.name,
            email: new_student.email,
            grade: new_student.grade,
            roll_number: new_student.roll_number,
        })
    }

    /// Get the student from the database that has the specified `student_id`,
    /// or return [Error::NotFound] if no such student exists.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns a [Error::NotFound] error if there is no student with the specified ID or [Error::SqlError] if there are SQL related errors.
    fn get(&self, student_id: DatabaseID) -> Result<Student, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, email, grade, roll_number FROM student WHERE id = :id")?
            .query_row(&[(":id", &student_id)], SQLiteStudentStore::map_row)
            .map_err(|error| error.into())
    }

    /// Get the student from the database that has the specified `email`
    /// address, or return [Error::NotFound] if no such student exists.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns a [Error::NotFound] error if there is no student with the specified email or [Error::SqlError] if there are SQL related errors.
    fn get_by_email(&self, email: &str) -> Result<Student, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, email, grade, roll_number FROM student WHERE email = :email")?
            .query_row(&[(":email", &email)], SQLiteStudentStore::map_row)
            .map_err(|error| error.into())
    }

    /// Retrieve every student in the database.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns a [Error::SqlError] if there are SQL related errors.
    fn get_all(&self) -> Result<Vec<Student>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name, email, grade, roll_number FROM student")?
            .query_map([], SQLiteStudentStore::map_row)?
            .map(|maybe_student| maybe_student.map_err(|error| error.into()))
            .collect()
    }
}

impl CreateTable for SQLiteStudentStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS student (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                grade TEXT NOT NULL,
                roll_number TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteStudentStore {
    type ReturnType = Student;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Student {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            email: row.get(offset + 2)?,
            grade: row.get(offset + 3)?,
            roll_number: row.get(offset + 4)?,
        })
    }
}

#[cfg(test)]
mod student_store_tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{Error, db::initialize, models::NewStudent};

    use super::{SQLiteStudentStore, StudentStore};

    fn get_test_store() -> SQLiteStudentStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let connection = Arc::new(Mutex::new(connection));

        SQLiteStudentStore::new(connection.clone())
    }

    fn new_student(name: &str, email: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: email.to_string(),
            grade: "A".to_string(),
            roll_number: "101".to_string(),
        }
    }

    #[test]
    fn create_student_succeeds() {
        let store = get_test_store();

        let student = store
            .create(new_student("Alice", "alice@example.com"))
            .unwrap();

        assert!(student.id > 0);
        assert_eq!(student.name, "Alice");
        assert_eq!(student.email, "alice@example.com");
        assert_eq!(student.grade, "A");
        assert_eq!(student.roll_number, "101");
    }

    #[test]
    fn create_student_with_duplicate_email_returns_duplicate_email() {
        let store = get_test_store();
        store
            .create(new_student("Alice", "alice@example.com"))
            .unwrap();

        let result = store.create(new_student("Bob", "alice@example.com"));

        assert_eq!(result, Err(Error::DuplicateEmail));
    }

    #[test]
    fn get_student_succeeds() {
        let store = get_test_store();
        let inserted_student = store
            .create(new_student("Alice", "alice@example.com"))
            .unwrap();

        let selected_student = store.get(inserted_student.id);

        assert_eq!(Ok(inserted_student), selected_student);
    }

    #[test]
    fn get_student_with_invalid_id_returns_not_found() {
        let store = get_test_store();
        let inserted_student = store
            .create(new_student("Alice", "alice@example.com"))
            .unwrap();

        let selected_student = store.get(inserted_student.id + 123);

        assert_eq!(selected_student, Err(Error::NotFound));
    }

    #[test]
    fn get_student_by_email_succeeds() {
        let store = get_test_store();
        let inserted_student = store
            .create(new_student("Alice", "alice@example.com"))
            .unwrap();

        let selected_student = store.get_by_email("alice@example.com");

        assert_eq!(Ok(inserted_student), selected_student);
    }

    #[test]
    fn get_student_by_unknown_email_returns_not_found() {
        let store = get_test_store();

        let selected_student = store.get_by_email("nobody@example.com");

        assert_eq!(selected_student, Err(Error::NotFound));
    }

    #[test]
    fn get_all_students() {
        let store = get_test_store();

        let inserted_students = HashSet::from([
            store
                .create(new_student("Alice", "alice@example.com"))
                .unwrap(),
            store.create(new_student("Bob", "bob@example.com")).unwrap(),
        ]);

        let selected_students = store.get_all().unwrap();
        let selected_students = HashSet::from_iter(selected_students);

        assert_eq!(inserted_students, selected_students);
    }
}
