//! Contact form state: fields, validators and the submission payload

mod contact_form;
mod field;
pub mod validators;

pub use contact_form::*;
pub use field::*;
