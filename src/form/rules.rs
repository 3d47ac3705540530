//! Built-in field validators shared by the contact, newsletter and auth forms.
//!
//! The email check is deliberately permissive: `local@domain.tld` shape with
//! no whitespace and no extra `@`. It must not be tightened.

use std::sync::LazyLock;

use regex::Regex;

use super::validation::{FieldError, FieldValidator};

/// Minimum message length used by the contact form variants.
pub const MESSAGE_MIN_LENGTH: usize = 10;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Fails with [`FieldError::Required`] when the trimmed value is empty.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Required;

impl FieldValidator for Required {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            Err(FieldError::Required)
        } else {
            Ok(())
        }
    }
}

/// Fails with [`FieldError::InvalidFormat`] unless the value looks like
/// `local@domain.tld`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Email;

impl FieldValidator for Email {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if is_valid_email(value) {
            Ok(())
        } else {
            Err(FieldError::InvalidFormat)
        }
    }
}

/// Fails with [`FieldError::TooShort`] when the trimmed value has fewer than
/// `min` characters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MinLength(pub usize);

impl FieldValidator for MinLength {
    fn validate(&self, value: &str) -> Result<(), FieldError> {
        if value.trim().chars().count() >= self.0 {
            Ok(())
        } else {
            Err(FieldError::TooShort { min: self.0 })
        }
    }
}

pub const fn required() -> Required {
    Required
}

pub const fn email() -> Email {
    Email
}

pub const fn min_length(min: usize) -> MinLength {
    MinLength(min)
}
