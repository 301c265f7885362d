//! Validation rules
//!
//! Field predicates and the ordered, short-circuiting form check.

use regex::Regex;
use std::sync::LazyLock;

use super::results::{AcceptedForm, ValidationVerdict};
use crate::error::ValidationError;
use crate::form::FormInput;

pub const MIN_AGE: f64 = 1.0;
pub const MAX_AGE: f64 = 150.0;

static TELEPHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A required value counts as present if anything but whitespace remains.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Parses an age the way a browser's `Number()` reads form text: decimal
/// with optional sign and exponent, or an unsigned `0x`/`0o`/`0b` integer.
fn parse_age(age: &str) -> Option<f64> {
    let radix = match age.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return age.parse::<f64>().ok(),
    };

    let digits = &age[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

/// Age must be numeric and in `[1, 150]`.
///
/// NaN and infinities fall outside the range.
pub fn validate_age(age: &str) -> bool {
    parse_age(age).is_some_and(|num| (MIN_AGE..=MAX_AGE).contains(&num))
}

/// Telephone is 7 to 15 ASCII digits, nothing else.
pub fn validate_telephone(telephone: &str) -> bool {
    TELEPHONE_RE.is_match(telephone)
}

/// Minimal `local@domain.tld` shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn has_required_fields(input: &FormInput) -> bool {
    [
        &input.name,
        &input.age,
        &input.gender,
        &input.country,
        &input.address,
        &input.telephone,
        &input.email,
    ]
    .into_iter()
    .all(|value| is_present(value))
        && !input.tech_stack.is_empty()
}

/// Applies the rules in order and stops at the first failure.
pub fn check(input: &FormInput) -> Result<(), ValidationError> {
    if !has_required_fields(input) {
        return Err(ValidationError::MissingFields);
    }
    if !validate_age(&input.age) {
        return Err(ValidationError::InvalidAge);
    }
    if !validate_telephone(&input.telephone) {
        return Err(ValidationError::InvalidTelephone);
    }
    if !validate_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Verdict for an already-normalized input.
pub fn validate_form(input: &FormInput) -> ValidationVerdict {
    match check(input) {
        Ok(()) => ValidationVerdict::Accepted,
        Err(e) => ValidationVerdict::Rejected(e),
    }
}

/// Normalizes and validates a raw submission.
///
/// This is the only way to obtain an [`AcceptedForm`].
pub fn accept(input: FormInput) -> Result<AcceptedForm, ValidationError> {
    let input = input.normalized();
    check(&input)?;
    Ok(AcceptedForm::new(input))
}
