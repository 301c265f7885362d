//! Command handlers
//!
//! Dispatches parsed commands to a form session and drives the line loop.

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::IntakeError;
use crate::error::handlers::{handle_error, is_recoverable};
use crate::protocol::commands::{CommandStatus, FormCommand, parse_command};
use crate::session::{FormSession, OutputPort};
use crate::validation::ValidationVerdict;

/// Apply one command to the session.
///
/// A rejected submission comes back as [`IntakeError::Validation`] after its
/// message has been written to the error slot.
pub async fn handle_command<P: OutputPort>(
    session: &mut FormSession<P>,
    command: FormCommand,
) -> Result<CommandStatus, IntakeError> {
    match command {
        FormCommand::Submit(input) => match session.submit(input).await {
            ValidationVerdict::Accepted => Ok(CommandStatus::Success),
            ValidationVerdict::Rejected(e) => Err(e.into()),
        },
        FormCommand::Reset => {
            session.reset().await;
            Ok(CommandStatus::Success)
        }
        FormCommand::Quit => Ok(CommandStatus::Quit),
    }
}

/// Reads commands line by line until `QUIT` or end of input.
///
/// Bad lines and rejected submissions are logged and skipped; only read
/// failures end the loop with an error.
pub async fn run_lines<R, P>(reader: R, session: &mut FormSession<P>) -> Result<(), IntakeError>
where
    R: AsyncBufRead + Unpin,
    P: OutputPort,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let status = match parse_command(&line) {
            Ok(command) => handle_command(session, command).await,
            Err(e) => Err(e),
        };

        match status {
            Ok(CommandStatus::Quit) => {
                info!("Quit requested");
                break;
            }
            Ok(CommandStatus::Success) => {}
            Err(e) if is_recoverable(&e) => handle_error(&e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntakeConfig;
    use crate::error::ValidationError;
    use crate::session::MemoryPort;

    const GOOD: &str = r#"SUBMIT {"name":"A","age":"30","gender":"F","country":"US","techStack":["Go"],"address":"1 St","telephone":"5551234567","email":"a@b.com"}"#;

    #[tokio::test(start_paused = true)]
    async fn test_handle_command_statuses() {
        let mut session = FormSession::new(MemoryPort::default(), IntakeConfig::default());

        let submit = parse_command(GOOD).unwrap();
        assert_eq!(
            handle_command(&mut session, submit).await.unwrap(),
            CommandStatus::Success
        );

        let bad = parse_command(r#"SUBMIT {"name":"A"}"#).unwrap();
        let err = handle_command(&mut session, bad).await.unwrap_err();
        assert!(matches!(
            err,
            IntakeError::Validation(ValidationError::MissingFields)
        ));
        assert!(is_recoverable(&err));
        assert_eq!(
            session.port().lock().await.error(),
            "Please fill all the fields and select at least one technology."
        );

        assert_eq!(
            handle_command(&mut session, FormCommand::Reset).await.unwrap(),
            CommandStatus::Success
        );
        assert_eq!(
            handle_command(&mut session, FormCommand::Quit).await.unwrap(),
            CommandStatus::Quit
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_lines_continues_after_rejection() {
        let mut session = FormSession::new(MemoryPort::default(), IntakeConfig::default());
        let input = format!("SUBMIT {{\"name\":\"A\"}}\n{}\n", GOOD);

        run_lines(input.as_bytes(), &mut session).await.unwrap();

        let port = session.port();
        let port = port.lock().await;
        assert!(port.error().is_empty());
        assert!(!port.result().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_lines_skips_bad_input_and_stops_at_quit() {
        let mut session = FormSession::new(MemoryPort::default(), IntakeConfig::default());
        let input = format!("\nBOGUS\nSUBMIT {{oops\n{}\nQUIT\nRESET\n", GOOD);

        run_lines(input.as_bytes(), &mut session).await.unwrap();

        let port = session.port();
        let port = port.lock().await;
        assert!(port.error().is_empty());
        assert!(port.result().contains("<td class=\"border px-4 py-2\">30</td>"));
    }
}
