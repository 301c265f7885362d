//! Error types
//!
//! Defines the validation error taxonomy and the crate-level error.

use std::fmt;
use std::io;

/// Reasons a submission is rejected.
///
/// Every variant maps to one fixed, user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    InvalidAge,
    InvalidTelephone,
    InvalidEmail,
}

impl ValidationError {
    /// Message shown in the error slot.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => {
                "Please fill all the fields and select at least one technology."
            }
            ValidationError::InvalidAge => "Please enter a valid age (1-150).",
            ValidationError::InvalidTelephone => {
                "Please enter a valid telephone number (7-15 digits, digits only)."
            }
            ValidationError::InvalidEmail => "Please enter a valid email address.",
        }
    }

    /// Short machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "missing-fields",
            ValidationError::InvalidAge => "invalid-age",
            ValidationError::InvalidTelephone => "invalid-telephone",
            ValidationError::InvalidEmail => "invalid-email",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// General intake error that encompasses all error types
#[derive(Debug)]
pub enum IntakeError {
    Validation(ValidationError),
    Config(config::ConfigError),
    IoError(io::Error),
    UnknownCommand(String),
    MalformedSubmission(String),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::Validation(e) => write!(f, "Validation error: {}", e),
            IntakeError::Config(e) => write!(f, "Configuration error: {}", e),
            IntakeError::IoError(e) => write!(f, "I/O error: {}", e),
            IntakeError::UnknownCommand(c) => write!(f, "Unknown command: {}", c),
            IntakeError::MalformedSubmission(msg) => {
                write!(f, "Malformed submission: {}", msg)
            }
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Validation(e) => Some(e),
            IntakeError::Config(e) => Some(e),
            IntakeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for IntakeError {
    fn from(error: ValidationError) -> Self {
        IntakeError::Validation(error)
    }
}

impl From<config::ConfigError> for IntakeError {
    fn from(error: config::ConfigError) -> Self {
        IntakeError::Config(error)
    }
}

impl From<io::Error> for IntakeError {
    fn from(error: io::Error) -> Self {
        IntakeError::IoError(error)
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(error: serde_json::Error) -> Self {
        IntakeError::MalformedSubmission(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvalidAge.to_string(),
            "Please enter a valid age (1-150)."
        );
        assert_eq!(ValidationError::MissingFields.code(), "missing-fields");
        assert_eq!(ValidationError::InvalidEmail.code(), "invalid-email");
    }

    #[test]
    fn test_intake_error_wraps_validation() {
        let err: IntakeError = ValidationError::InvalidTelephone.into();
        assert!(matches!(
            err,
            IntakeError::Validation(ValidationError::InvalidTelephone)
        ));
        assert!(err.to_string().starts_with("Validation error:"));
    }
}
