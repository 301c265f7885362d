//! Form Intake - Entry Point
//!
//! Reads `SUBMIT`/`RESET`/`QUIT` commands from stdin and writes the error and
//! result slots to stdout.

use log::info;
use tokio::io::BufReader;

use form_intake::FormSession;
use form_intake::config::IntakeConfig;
use form_intake::error::IntakeError;
use form_intake::error::handlers::{error_to_exit_code, handle_error};
use form_intake::protocol::run_lines;
use form_intake::session::ConsolePort;
use form_intake::utils::logging::setup_logging;

fn exit_with(err: IntakeError) -> ! {
    handle_error(&err);
    std::process::exit(error_to_exit_code(&err));
}

#[tokio::main]
async fn main() {
    setup_logging();

    let config = IntakeConfig::load().unwrap_or_else(|e| exit_with(e.into()));
    info!(
        "Starting form intake (reset after {} ms, cancel pending reset: {}, format: {:?})",
        config.reset_delay_ms, config.cancel_pending_reset, config.output_format
    );

    let mut session = FormSession::new(ConsolePort::stdout(), config);
    let stdin = BufReader::new(tokio::io::stdin());

    if let Err(e) = run_lines(stdin, &mut session).await {
        exit_with(e);
    }

    // Let the last automatic reset land before exiting.
    session.wait_for_pending_reset().await;
    info!("Form intake stopped");
}
