use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::db::models::student::NewStudent;

pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 30;

// Local part and labels as accepted by HTML form email inputs
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("Invalid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Email,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, rule: Rule, message: impl Into<String>) -> Self {
        Self { field, rule, message: message.into() }
    }
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Checks every field and returns one error per failing field, in the order
/// name, email, age.
pub fn validate_student(student: &NewStudent) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if student.name.trim().is_empty() {
        errors.push(FieldError::new("name", Rule::Required, "name is a required field"));
    }

    if student.email.is_empty() {
        errors.push(FieldError::new("email", Rule::Required, "email is a required field"));
    } else if !is_valid_email(&student.email) {
        errors.push(FieldError::new("email", Rule::Email, "email must be a valid email address"));
    }

    if !(MIN_AGE..=MAX_AGE).contains(&student.age) {
        errors.push(FieldError::new(
            "age",
            Rule::Range,
            format!("age must be between {} and {}", MIN_AGE, MAX_AGE),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
