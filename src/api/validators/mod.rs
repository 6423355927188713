pub mod student;

pub use student::{validate_student, FieldError, Rule};
