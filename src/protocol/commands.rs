//! Module `commands`
//!
//! Defines the driver's line commands and their parsing.

use crate::error::IntakeError;
use crate::form::FormInput;

/// A command read from one input line.
#[derive(Debug, PartialEq)]
pub enum FormCommand {
    /// `SUBMIT <json form>`
    Submit(FormInput),
    /// `RESET`
    Reset,
    /// `QUIT` or `Q`
    Quit,
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Quit,
}

/// Parses a raw line into a [`FormCommand`].
///
/// The command word is case-insensitive; the `SUBMIT` payload is a JSON
/// object using the form's field names.
pub fn parse_command(raw: &str) -> Result<FormCommand, IntakeError> {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "SUBMIT" if arg.is_empty() => Err(IntakeError::MalformedSubmission(
            "missing form payload".into(),
        )),
        "SUBMIT" => Ok(FormCommand::Submit(serde_json::from_str(arg)?)),
        "RESET" => Ok(FormCommand::Reset),
        "QUIT" | "Q" => Ok(FormCommand::Quit),
        _ => Err(IntakeError::UnknownCommand(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("RESET").unwrap(), FormCommand::Reset);
        assert_eq!(parse_command("  reset  ").unwrap(), FormCommand::Reset);
        assert_eq!(parse_command("QUIT").unwrap(), FormCommand::Quit);
        assert_eq!(parse_command("q").unwrap(), FormCommand::Quit);
    }

    #[test]
    fn test_parse_submit() {
        let command = parse_command(
            r#"submit {"name":"A","age":"30","techStack":["Go"],"address":"1 St\nTown"}"#,
        )
        .unwrap();

        match command {
            FormCommand::Submit(input) => {
                assert_eq!(input.name, "A");
                assert_eq!(input.tech_stack, vec!["Go"]);
                assert_eq!(input.address, "1 St\nTown");
                assert!(input.email.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_submit() {
        assert!(matches!(
            parse_command("SUBMIT"),
            Err(IntakeError::MalformedSubmission(_))
        ));
        assert!(matches!(
            parse_command("SUBMIT {not json"),
            Err(IntakeError::MalformedSubmission(_))
        ));
        assert!(matches!(
            parse_command(r#"SUBMIT {"techStack":"Go"}"#),
            Err(IntakeError::MalformedSubmission(_))
        ));
    }

    #[test]
    fn test_unknown_commands() {
        assert!(matches!(
            parse_command("FOO bar"),
            Err(IntakeError::UnknownCommand(c)) if c == "FOO bar"
        ));
        assert!(matches!(
            parse_command(""),
            Err(IntakeError::UnknownCommand(_))
        ));
    }
}
