//! Error handling and display for the CLI.

use colored::Colorize;
use iguid_id::FormatError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid GUID: {0}")]
    Parse(#[from] FormatError),

    #[error("Invalid insertion point: {0}")]
    InvalidSelection(String),

    #[error("No candidate labelled '{0}'")]
    UnknownLabel(String),

    #[error("Nothing to save")]
    NothingToSet,
}

impl CliError {
    /// Create an insertion point error.
    pub fn selection(message: impl Into<String>) -> Self {
        Self::InvalidSelection(message.into())
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        let hint = match cli_err {
            CliError::Parse(_) => Some(
                "Hint: expected xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx, optionally in braces."
                    .to_string(),
            ),
            CliError::InvalidSelection(_) => Some(
                "Hint: use byte offsets (--at 12) or ranges (--select 4:40) inside the buffer."
                    .to_string(),
            ),
            CliError::UnknownLabel(_) => Some("Hint: run `guid list` to see the labels.".to_string()),
            CliError::NothingToSet => Some(
                "Hint: pass at least one of --lowercase, --uppercase, --snippets with true or false."
                    .to_string(),
            ),
        };

        if let Some(hint) = hint {
            eprintln!("\n{}", hint.yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = CliError::from(FormatError::Empty);
        assert_eq!(err.to_string(), "Invalid GUID: GUID cannot be empty");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = CliError::UnknownLabel("9".to_string()).into();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnknownLabel(label)) if label == "9"
        ));
    }
}
