//! Error handlers
//!
//! Provides error reporting and exit-code mapping.

use crate::error::types::IntakeError;
use crate::utils::logging::log_rejection;
use log::{error, warn};

/// Log an intake error at a level matching its severity
pub fn handle_error(err: &IntakeError) {
    match err {
        IntakeError::Validation(e) => log_rejection(e),
        IntakeError::UnknownCommand(_) | IntakeError::MalformedSubmission(_) => {
            warn!("{}", err)
        }
        IntakeError::Config(_) | IntakeError::IoError(_) => error!("Form intake error: {}", err),
    }
}

/// Whether the driver loop can keep reading commands after this error
pub fn is_recoverable(err: &IntakeError) -> bool {
    !matches!(err, IntakeError::Config(_) | IntakeError::IoError(_))
}

/// Convert error to a process exit code
pub fn error_to_exit_code(err: &IntakeError) -> i32 {
    match err {
        IntakeError::Validation(_) => 1,
        IntakeError::UnknownCommand(_) => 2,
        IntakeError::MalformedSubmission(_) => 2,
        IntakeError::Config(_) => 78,
        IntakeError::IoError(_) => 74,
    }
}
