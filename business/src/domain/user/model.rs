use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::UserError;
use crate::domain::shared::value_objects::UserId;

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 16;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A user ready to be inserted. The password is already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Raw registration input, checked before anything is hashed or stored.
pub struct RegistrationProps<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl RegistrationProps<'_> {
    pub fn validate(&self) -> Result<(), UserError> {
        if self.first_name.trim().is_empty() {
            return Err(UserError::FirstNameEmpty);
        }

        if self.last_name.trim().is_empty() {
            return Err(UserError::LastNameEmpty);
        }

        if !is_valid_email(self.email) {
            return Err(UserError::InvalidEmail);
        }

        let length = self.password.chars().count();
        if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
            return Err(UserError::InvalidPasswordLength);
        }

        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl NewUser {
    pub fn new(first_name: String, last_name: String, email: String, password_hash: String) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl User {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password_hash,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props<'a>(email: &'a str, password: &'a str) -> RegistrationProps<'a> {
        RegistrationProps {
            first_name: "Ada",
            last_name: "Lovelace",
            email,
            password,
        }
    }

    #[test]
    fn should_accept_valid_registration() {
        assert!(props("ada@example.com", "analytical").validate().is_ok());
    }

    #[test]
    fn should_reject_blank_first_name() {
        let registration = RegistrationProps {
            first_name: " ",
            ..props("ada@example.com", "analytical")
        };

        assert!(matches!(
            registration.validate(),
            Err(UserError::FirstNameEmpty)
        ));
    }

    #[test]
    fn should_reject_malformed_email() {
        assert!(matches!(
            props("ada.example.com", "analytical").validate(),
            Err(UserError::InvalidEmail)
        ));
    }

    #[test]
    fn should_reject_short_password() {
        assert!(matches!(
            props("ada@example.com", "short").validate(),
            Err(UserError::InvalidPasswordLength)
        ));
    }

    #[test]
    fn should_reject_long_password() {
        assert!(matches!(
            props("ada@example.com", "a-very-long-password").validate(),
            Err(UserError::InvalidPasswordLength)
        ));
    }
}
