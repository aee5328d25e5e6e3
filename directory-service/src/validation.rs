//! Candidate validation for new directory entries

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::NewUser;

/// Email shape accepted by the directory. Word characters are ASCII only.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("valid email pattern")
});

/// Form fields of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::FirstName => write!(f, "first name"),
            Field::LastName => write!(f, "last name"),
            Field::Email => write!(f, "email"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail { email: String },

    #[error("All fields are required ({field} is empty).")]
    MissingField { field: Field },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check a candidate before it is added.
///
/// The email pattern is checked before the blank-field rule, so an empty
/// email reports `InvalidEmail`.
pub fn validate_candidate(candidate: &NewUser) -> Result<(), ValidationError> {
    if !is_valid_email(&candidate.email) {
        return Err(ValidationError::InvalidEmail {
            email: candidate.email.clone(),
        });
    }

    let fields = [
        (Field::FirstName, &candidate.first_name),
        (Field::LastName, &candidate.last_name),
        (Field::Email, &candidate.email),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField { field });
        }
    }

    Ok(())
}
