mod all_endpoint;
mod create_endpoint;
mod get_endpoint;

pub use all_endpoint::get_all_students_endpoint;
pub use create_endpoint::create_student_endpoint;
pub use get_endpoint::get_student_endpoint;
