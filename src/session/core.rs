use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::config::IntakeConfig;
use crate::error::ValidationError;
use crate::form::FormInput;
use crate::render::{SummaryRecord, render};
use crate::session::ports::OutputPort;
use crate::utils::logging::{log_render, log_reset, log_submission};
use crate::validation::{ValidationVerdict, accept};

/// Validate, then sanitize. No side effects.
pub fn handle_submit(input: FormInput) -> Result<SummaryRecord, ValidationError> {
    let accepted = accept(input)?;
    Ok(SummaryRecord::from_accepted(accepted))
}

/// Routes submit and reset events to an output port and owns the automatic
/// reset that follows a successful render.
pub struct FormSession<P: OutputPort> {
    port: Arc<Mutex<P>>,
    config: Arc<IntakeConfig>,
    pending_reset: Option<JoinHandle<()>>,
}

impl<P: OutputPort> FormSession<P> {
    pub fn new(port: P, config: IntakeConfig) -> Self {
        Self {
            port: Arc::new(Mutex::new(port)),
            config: Arc::new(config),
            pending_reset: None,
        }
    }

    /// Shared handle to the output port
    pub fn port(&self) -> Arc<Mutex<P>> {
        Arc::clone(&self.port)
    }

    /// Handles a submit event.
    ///
    /// The error slot is cleared first. A rejection writes its message and
    /// leaves the result slot and any pending reset alone; an acceptance
    /// replaces the result slot and schedules a fresh automatic reset.
    pub async fn submit(&mut self, input: FormInput) -> ValidationVerdict {
        log_submission(input.tech_stack.len());

        let port = Arc::clone(&self.port);
        let mut port = port.lock().await;
        port.clear_error().await;

        match handle_submit(input) {
            Ok(summary) => {
                // The older timer must not outlive the result it was meant to clear.
                self.cancel_pending_reset();

                let content = render(&summary, self.config.output_format);
                log_render(content.len());
                port.show_result(&content).await;
                drop(port);

                self.schedule_reset();
                ValidationVerdict::Accepted
            }
            Err(e) => {
                port.show_error(e.message()).await;
                ValidationVerdict::Rejected(e)
            }
        }
    }

    /// Handles a reset event: both slots are cleared.
    pub async fn reset(&mut self) {
        self.cancel_pending_reset();
        clear_slots(&self.port, false).await;
    }

    /// Whether an automatic reset is scheduled and has not run yet
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits until the most recently scheduled reset has run (or was aborted).
    pub async fn wait_for_pending_reset(&mut self) {
        if let Some(handle) = self.pending_reset.take() {
            let _ = handle.await;
        }
    }

    fn cancel_pending_reset(&mut self) {
        if !self.config.cancel_pending_reset {
            return;
        }
        if let Some(handle) = self.pending_reset.take() {
            if !handle.is_finished() {
                debug!("Cancelling pending form reset");
            }
            handle.abort();
        }
    }

    fn schedule_reset(&mut self) {
        let port = Arc::clone(&self.port);
        let delay = self.config.reset_delay();

        // Replacing a live handle without aborting detaches the older timer.
        self.pending_reset = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            clear_slots(&port, true).await;
        }));
    }
}

async fn clear_slots<P: OutputPort>(port: &Mutex<P>, automatic: bool) {
    let mut port = port.lock().await;
    port.clear_error().await;
    port.clear_result().await;
    log_reset(automatic);
}
