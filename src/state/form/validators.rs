//! Pure per-field validation rules
//!
//! Each validator maps the field's current value to `Ok(())` or the exact
//! message shown next to the field. Validators never touch state; attaching
//! the outcome to a field is the form's job.

use regex::Regex;
use std::sync::OnceLock;

/// Shown when a required field (other than consent) is empty
pub const REQUIRED_FIELD: &str = "Please fill out this required field.";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address (e.g., user@domain.com).";
pub const PHONE_INVALID: &str = "Please enter a valid contact number (at least 10 digits).";
pub const ROLE_REQUIRED: &str = "Please select an option.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long.";
pub const CONSENT_REQUIRED: &str = "You must agree to receive communications to proceed.";

/// Minimum trimmed length for the name field
const NAME_MIN_LEN: usize = 2;
/// Minimum trimmed length for the message field
const MESSAGE_MIN_LEN: usize = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Digits, spaces, +, -, parentheses; at least 10 characters total
    PATTERN.get_or_init(|| Regex::new(r"^[0-9\s+()-]{10,}$").expect("valid phone regex"))
}

pub fn validate_fullname(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        Err(REQUIRED_FIELD)
    } else if value.chars().count() < NAME_MIN_LEN {
        Err(NAME_TOO_SHORT)
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        Err(REQUIRED_FIELD)
    } else if !email_pattern().is_match(value) {
        Err(EMAIL_INVALID)
    } else {
        Ok(())
    }
}

pub fn validate_phone(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        Err(REQUIRED_FIELD)
    } else if !phone_pattern().is_match(value) {
        Err(PHONE_INVALID)
    } else {
        Ok(())
    }
}

pub fn validate_role(selection: Option<usize>) -> Result<(), &'static str> {
    if selection.is_none() {
        Err(ROLE_REQUIRED)
    } else {
        Ok(())
    }
}

pub fn validate_message(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        Err(REQUIRED_FIELD)
    } else if value.chars().count() < MESSAGE_MIN_LEN {
        Err(MESSAGE_TOO_SHORT)
    } else {
        Ok(())
    }
}

pub fn validate_consent(checked: bool) -> Result<(), &'static str> {
    if checked {
        Ok(())
    } else {
        Err(CONSENT_REQUIRED)
    }
}
