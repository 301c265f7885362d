//! Summary fields
//!
//! The fixed set of rows shown for an accepted submission.

/// A row of the summary table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Gender,
    Country,
    TechStack,
    Address,
    Telephone,
    Email,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Age,
        Field::Gender,
        Field::Country,
        Field::TechStack,
        Field::Address,
        Field::Telephone,
        Field::Email,
    ];

    /// Row header text
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Country => "Country",
            Field::TechStack => "Technological Stack",
            Field::Address => "Address",
            Field::Telephone => "Telephone",
            Field::Email => "Email",
        }
    }

    /// Multi-line values keep their line breaks when displayed.
    pub fn preserves_whitespace(&self) -> bool {
        matches!(self, Field::Address)
    }
}
