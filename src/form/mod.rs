//! Form model
//!
//! Holds the raw submission record and the summary field list.

pub mod fields;
pub mod input;

pub use fields::Field;
pub use input::FormInput;
