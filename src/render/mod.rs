//! Rendering
//!
//! Escapes accepted input and renders it for the result slot.

pub mod markup;
pub mod sanitize;
pub mod summary;

use serde::Deserialize;

pub use markup::{render_html, render_text};
pub use sanitize::sanitize;
pub use summary::SummaryRecord;

/// Representation written to the result slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

/// Render a summary in the requested format
pub fn render(summary: &SummaryRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => render_html(summary),
        OutputFormat::Text => render_text(summary),
    }
}
