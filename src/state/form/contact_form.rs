//! Contact form state and submission payload

use super::field::{ContactField, Validity};
use super::validators;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Field indices in document order
pub const FIELD_FULLNAME: usize = 0;
pub const FIELD_EMAIL: usize = 1;
pub const FIELD_PHONE: usize = 2;
pub const FIELD_ROLE: usize = 3;
pub const FIELD_MESSAGE: usize = 4;
pub const FIELD_CONSENT: usize = 5;
pub const FIELD_COUNT: usize = 6;

/// A selectable option for the role field
pub struct RoleOption {
    /// Submitted value
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Options for the "I am a" select, in display order
pub const ROLE_OPTIONS: &[RoleOption] = &[
    RoleOption {
        value: "student",
        label: "Student",
    },
    RoleOption {
        value: "professional",
        label: "Working Professional",
    },
    RoleOption {
        value: "educator",
        label: "Educator",
    },
    RoleOption {
        value: "other",
        label: "Other",
    },
];

/// Payload handed to the transport once every field validates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySubmission {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub message: String,
    pub consent: bool,
    pub timestamp: String,
}

/// The six-field contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fullname: ContactField,
    pub email: ContactField,
    pub phone: ContactField,
    pub role: ContactField,
    pub message: ContactField,
    pub consent: ContactField,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fullname: ContactField::text("fullname", "Full Name", false),
            email: ContactField::text("email", "Email Address", false),
            phone: ContactField::text("phone", "Contact Number", false),
            role: ContactField::select("role", "I am a"),
            message: ContactField::text("message", "Your Query", true),
            consent: ContactField::checkbox(
                "consent",
                "I agree to receive communications about Techfest",
            ),
        }
    }

    pub fn field(&self, index: usize) -> Option<&ContactField> {
        match index {
            FIELD_FULLNAME => Some(&self.fullname),
            FIELD_EMAIL => Some(&self.email),
            FIELD_PHONE => Some(&self.phone),
            FIELD_ROLE => Some(&self.role),
            FIELD_MESSAGE => Some(&self.message),
            FIELD_CONSENT => Some(&self.consent),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut ContactField> {
        match index {
            FIELD_FULLNAME => Some(&mut self.fullname),
            FIELD_EMAIL => Some(&mut self.email),
            FIELD_PHONE => Some(&mut self.phone),
            FIELD_ROLE => Some(&mut self.role),
            FIELD_MESSAGE => Some(&mut self.message),
            FIELD_CONSENT => Some(&mut self.consent),
            _ => None,
        }
    }

    /// Run the validator for one field and record the outcome on it
    pub fn validate_field(&mut self, index: usize) {
        let outcome = match index {
            FIELD_FULLNAME => validators::validate_fullname(self.fullname.as_text()),
            FIELD_EMAIL => validators::validate_email(self.email.as_text()),
            FIELD_PHONE => validators::validate_phone(self.phone.as_text()),
            FIELD_ROLE => validators::validate_role(self.role.selected()),
            FIELD_MESSAGE => validators::validate_message(self.message.as_text()),
            FIELD_CONSENT => validators::validate_consent(self.consent.is_checked()),
            _ => return,
        };
        let validity = match outcome {
            Ok(()) => Validity::Valid,
            Err(msg) => Validity::Invalid(msg),
        };
        if let Some(field) = self.field_mut(index) {
            field.validity = validity;
        }
    }

    /// Validate every field; returns true when all six pass
    pub fn validate_all(&mut self) -> bool {
        for index in 0..FIELD_COUNT {
            self.validate_field(index);
        }
        (0..FIELD_COUNT).all(|i| self.field(i).is_some_and(|f| f.validity.is_valid()))
    }

    /// First field in document order currently marked invalid
    pub fn first_invalid(&self) -> Option<usize> {
        (0..FIELD_COUNT).find(|&i| self.field(i).is_some_and(|f| f.validity.is_invalid()))
    }

    /// Chosen role value, if any
    pub fn role_value(&self) -> Option<&'static str> {
        self.role
            .selected()
            .and_then(|i| ROLE_OPTIONS.get(i))
            .map(|o| o.value)
    }

    /// Assemble the submission payload from the current values.
    ///
    /// Text values are trimmed; the timestamp is ISO-8601 UTC.
    pub fn submission(&self) -> QuerySubmission {
        QuerySubmission {
            fullname: self.fullname.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            phone: self.phone.as_text().trim().to_string(),
            role: self.role_value().unwrap_or_default().to_string(),
            message: self.message.as_text().trim().to_string(),
            consent: self.consent.is_checked(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Reset every field value and validation state
    pub fn clear(&mut self) {
        for index in 0..FIELD_COUNT {
            if let Some(field) = self.field_mut(index) {
                field.clear();
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
