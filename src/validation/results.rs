//! Validation result types
//!
//! Defines the verdict and the accepted-input token returned by validation.

use crate::error::ValidationError;
use crate::form::FormInput;

/// Outcome of applying every rule to a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationVerdict {
    Accepted,
    Rejected(ValidationError),
}

impl ValidationVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationVerdict::Accepted)
    }

    /// User-facing reason, if rejected
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            ValidationVerdict::Accepted => None,
            ValidationVerdict::Rejected(e) => Some(e.message()),
        }
    }
}

/// A normalized form that passed every rule.
///
/// Only [`accept`](super::accept) constructs one.
#[derive(Debug, Clone)]
pub struct AcceptedForm {
    input: FormInput,
}

impl AcceptedForm {
    pub(super) fn new(input: FormInput) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn into_inner(self) -> FormInput {
        self.input
    }
}
