//! Output ports
//!
//! The two render targets a form session writes to: the error-message slot
//! and the result slot. Each update replaces the slot wholesale.

use log::warn;
use std::future::Future;
use tokio::io::{self, AsyncWrite, AsyncWriteExt};

/// Render targets owned by the embedding UI layer.
pub trait OutputPort: Send + 'static {
    fn show_error(&mut self, message: &str) -> impl Future<Output = ()> + Send;
    fn clear_error(&mut self) -> impl Future<Output = ()> + Send;
    fn show_result(&mut self, content: &str) -> impl Future<Output = ()> + Send;
    fn clear_result(&mut self) -> impl Future<Output = ()> + Send;
}

/// Keeps both slots in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPort {
    error: String,
    result: String,
}

impl MemoryPort {
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}

impl OutputPort for MemoryPort {
    async fn show_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    async fn clear_error(&mut self) {
        self.error.clear();
    }

    async fn show_result(&mut self, content: &str) {
        self.result = content.to_string();
    }

    async fn clear_result(&mut self) {
        self.result.clear();
    }
}

/// Writes slot changes to a stream as tagged lines.
///
/// Clearing an already-empty slot writes nothing.
pub struct ConsolePort<W: AsyncWrite + Unpin + Send + 'static> {
    out: W,
    error_shown: bool,
    result_shown: bool,
}

impl ConsolePort<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send + 'static> ConsolePort<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error_shown: false,
            result_shown: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    async fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).await {
            warn!("Failed to write to output: {}", e);
            return;
        }
        if let Err(e) = self.out.flush().await {
            warn!("Failed to flush output: {}", e);
        }
    }
}

impl<W: AsyncWrite + Unpin + Send + 'static> OutputPort for ConsolePort<W> {
    async fn show_error(&mut self, message: &str) {
        self.emit(&format!("ERROR {}\n", message)).await;
        self.error_shown = true;
    }

    async fn clear_error(&mut self) {
        if self.error_shown {
            self.emit("ERROR CLEARED\n").await;
            self.error_shown = false;
        }
    }

    async fn show_result(&mut self, content: &str) {
        let mut block = format!("RESULT\n{}", content);
        if !block.ends_with('\n') {
            block.push('\n');
        }
        block.push_str("END\n");
        self.emit(&block).await;
        self.result_shown = true;
    }

    async fn clear_result(&mut self) {
        if self.result_shown {
            self.emit("RESULT CLEARED\n").await;
            self.result_shown = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_port_replaces_slots() {
        let mut port = MemoryPort::default();
        port.show_error("first").await;
        port.show_error("second").await;
        port.show_result("<table></table>").await;
        assert_eq!(port.error(), "second");
        assert_eq!(port.result(), "<table></table>");

        port.clear_error().await;
        port.clear_result().await;
        assert_eq!(port, MemoryPort::default());
    }

    #[tokio::test]
    async fn test_console_port_output() {
        let mut port = ConsolePort::new(Vec::new());
        port.clear_error().await;
        port.show_error("Please enter a valid email address.").await;
        port.clear_error().await;
        port.show_result("Name  A").await;
        port.clear_result().await;
        port.clear_result().await;

        let written = String::from_utf8(port.into_inner()).unwrap();
        assert_eq!(
            written,
            "ERROR Please enter a valid email address.\n\
             ERROR CLEARED\n\
             RESULT\nName  A\nEND\n\
             RESULT CLEARED\n"
        );
    }
}
