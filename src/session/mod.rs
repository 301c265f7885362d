//! Form session
//!
//! Adapter between submit/reset events and the output slots. The
//! validate-and-render step itself is the pure [`handle_submit`].

pub mod core;
pub mod ports;

pub use self::core::{FormSession, handle_submit};
pub use ports::{ConsolePort, MemoryPort, OutputPort};
