//! Logging utilities
//!
//! Provides logger setup and form event logging.

use env_logger::Env;
use log::{debug, info, warn};

use crate::error::ValidationError;

/// Setup logging; `RUST_LOG` overrides the default `info` filter
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Log an incoming submission
pub fn log_submission(tech_count: usize) {
    debug!("Form submitted with {} technologies selected", tech_count);
}

/// Log a rejected submission
pub fn log_rejection(err: &ValidationError) {
    warn!("Submission rejected ({}): {}", err.code(), err);
}

/// Log a rendered summary
pub fn log_render(bytes: usize) {
    info!("Submission accepted, summary rendered ({} bytes)", bytes);
}

/// Log a form reset
pub fn log_reset(automatic: bool) {
    if automatic {
        info!("Form reset by timer");
    } else {
        info!("Form reset");
    }
}
