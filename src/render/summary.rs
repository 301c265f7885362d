//! Summary record
//!
//! The sanitized, display-ready version of an accepted submission.

use super::sanitize::sanitize;
use crate::form::Field;
use crate::validation::AcceptedForm;

pub const TECH_STACK_SEPARATOR: &str = ", ";

/// Escaped values of one accepted submission. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    name: String,
    age: String,
    gender: String,
    country: String,
    tech_stack: String,
    address: String,
    telephone: String,
    email: String,
}

impl SummaryRecord {
    /// Escapes every field; technologies are escaped one by one, then joined.
    pub fn from_accepted(form: AcceptedForm) -> Self {
        let input = form.into_inner();
        let tech_stack = input
            .tech_stack
            .iter()
            .map(|tech| sanitize(tech))
            .collect::<Vec<_>>()
            .join(TECH_STACK_SEPARATOR);

        Self {
            name: sanitize(&input.name),
            age: sanitize(&input.age),
            gender: sanitize(&input.gender),
            country: sanitize(&input.country),
            tech_stack,
            address: sanitize(&input.address),
            telephone: sanitize(&input.telephone),
            email: sanitize(&input.email),
        }
    }

    /// Escaped value shown for a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Country => &self.country,
            Field::TechStack => &self.tech_stack,
            Field::Address => &self.address,
            Field::Telephone => &self.telephone,
            Field::Email => &self.email,
        }
    }

    /// All eight rows in display order.
    pub fn rows(&self) -> [(Field, &str); 8] {
        Field::ALL.map(|field| (field, self.value(field)))
    }
}
