//! Error handling
//!
//! Defines error types and handling for form intake.

pub mod handlers;
pub mod types;

pub use types::*;
