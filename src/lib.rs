pub mod config;
pub mod error;
pub mod form;
pub mod protocol;
pub mod render;
pub mod session;
pub mod utils;
pub mod validation;

pub use form::FormInput;
pub use session::{FormSession, handle_submit};
