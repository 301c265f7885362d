//! Input validation
//!
//! Decides whether a raw submission is acceptable.

pub mod results;
pub mod rules;

pub use results::{AcceptedForm, ValidationVerdict};
pub use rules::{
    accept, check, is_present, validate_age, validate_email, validate_form, validate_telephone,
};
