//! Driver line protocol
//!
//! Handles command parsing and dispatch for the `form-intake` binary.

pub mod commands;
pub mod handlers;

pub use commands::{CommandStatus, FormCommand, parse_command};
pub use handlers::{handle_command, run_lines};
