//! Pre-flight validation of user input.
//!
//! Nothing here touches the network; a failed check is reported to the user
//! and the remote call is skipped.

use shared::models::user::MAX_AGE;
use shared::models::{UserPayload, UserRecord};
use thiserror::Error;

/// Validation errors that can occur before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty
    #[error("Please fill in all fields")]
    MissingFields,
    /// Age is not an integer in `1..=120`
    #[error("Please enter a valid age")]
    InvalidAge,
    /// Email address is malformed
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Lookup was submitted without an id
    #[error("Please enter a user ID")]
    MissingId,
}

/// Raw form state for the create and edit screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub occupation: String,
}

impl UserDraft {
    /// Turn the form into a request body.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found: missing fields first, then
    /// the age, then the email.
    pub fn validate(&self) -> Result<UserPayload, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let occupation = self.occupation.trim();
        if name.is_empty() || email.is_empty() || self.age.trim().is_empty() || occupation.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        let age = validate_age(&self.age)?;
        validate_email(email)?;

        Ok(UserPayload {
            name: name.to_string(),
            email: email.to_string(),
            age,
            occupation: occupation.to_string(),
        })
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age.to_string(),
            occupation: record.occupation.clone(),
        }
    }
}

/// Validates an age field.
///
/// # Validation rules
/// - Must parse as a whole number
/// - Must be between 1 and 120 inclusive
pub fn validate_age(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<u32>() {
        Ok(age) if (1..=MAX_AGE).contains(&age) => Ok(age),
        _ => Err(ValidationError::InvalidAge),
    }
}

/// Validates an email address.
///
/// # Validation rules
/// - Exactly one '@' with text on both sides
/// - No whitespace
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Validates a lookup id, returning it trimmed.
pub fn validate_user_id(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingId);
    }
    Ok(trimmed.to_string())
}
