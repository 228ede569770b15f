//! Input validation for user creation

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::models::NewUser;

const MAX_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 254;

/// A single field that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Validate display name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name", "Name is required"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new(
            "name",
            format!("Name must be at most {MAX_NAME_LENGTH} characters long"),
        ));
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("email", "Email is required"));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::new(
            "email",
            format!("Email must be at most {MAX_EMAIL_LENGTH} characters long"),
        ));
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(ValidationError::new("email", "Invalid email format"));
    }

    Ok(())
}

impl NewUser {
    /// Check every field, reporting the first one that fails
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ada Lovelace").is_ok());

        let err = validate_name("").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.reason, "Name is required");

        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_email() {
        for email in ["ada@example.com", "first.last+tag@mail.example.org", "a_b%c@x.io"] {
            assert!(validate_email(email).is_ok(), "{email} should be accepted");
        }

        for email in ["", "ada", "ada@", "@example.com", "ada@example", "ada example@x.com"] {
            let err = validate_email(email).unwrap_err();
            assert_eq!(err.field, "email", "{email} should be rejected");
        }

        let long = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(validate_email(&long).is_err());
    }

    #[test]
    fn test_new_user_validate_reports_field() {
        assert!(NewUser::new("Ada", "ada@example.com").validate().is_ok());

        let err = NewUser::new("", "ada@example.com").validate().unwrap_err();
        assert_eq!(err.to_string(), "name: Name is required");

        let err = NewUser::new("Ada", "not-an-email").validate().unwrap_err();
        assert_eq!(err.to_string(), "email: Invalid email format");
    }
}
