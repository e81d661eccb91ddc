//! Choosing one candidate from the pick list.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use iguid_catalog::Candidate;
use tracing::debug;

use crate::error::CliError;

/// Result of a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Index into the candidate slice.
    Chosen(usize),
    /// The user backed out; nothing should be inserted.
    Canceled,
}

/// Chooses one candidate from a pick list.
pub trait Picker {
    fn pick(&mut self, items: &[Candidate<'_>]) -> Result<PickOutcome>;
}

/// Picks the candidate with a fixed label.
#[derive(Debug, Clone)]
pub struct LabelPicker {
    label: String,
}

impl LabelPicker {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Picker for LabelPicker {
    fn pick(&mut self, items: &[Candidate<'_>]) -> Result<PickOutcome> {
        let label = self.label.trim();
        items
            .iter()
            .position(|item| item.label() == label)
            .map(PickOutcome::Chosen)
            .ok_or_else(|| CliError::UnknownLabel(label.to_string()).into())
    }
}

/// Shows a numbered list and reads a label from `input`.
///
/// An empty line or end of input cancels. Unknown labels prompt again.
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn show(&mut self, items: &[Candidate<'_>]) -> Result<()> {
        let width = items.len().to_string().len();
        for item in items {
            writeln!(
                self.output,
                "{:>width$}  {}",
                item.label(),
                item.description(),
                width = width
            )?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Picker for PromptPicker<R, W> {
    fn pick(&mut self, items: &[Candidate<'_>]) -> Result<PickOutcome> {
        if items.is_empty() {
            return Ok(PickOutcome::Canceled);
        }

        self.show(items)?;

        loop {
            write!(
                self.output,
                "Select a format [1-{}] (empty to cancel): ",
                items.len()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read selection")?;
            let choice = line.trim();

            if read == 0 || choice.is_empty() {
                debug!("Selection canceled");
                return Ok(PickOutcome::Canceled);
            }

            if let Some(index) = items.iter().position(|item| item.label() == choice) {
                debug!(label = choice, "Selection made");
                return Ok(PickOutcome::Chosen(index));
            }

            writeln!(self.output, "No format labelled '{}'.", choice)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iguid_catalog::{build_candidates, Categories};
    use iguid_id::Guid;

    fn prompt(input: &str, items: &[Candidate<'_>]) -> (PickOutcome, String) {
        let mut output = Vec::new();
        let outcome = PromptPicker::new(input.as_bytes(), &mut output)
            .pick(items)
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_chooses_by_label() {
        let items = build_candidates(Guid::new(), Categories::ALL);
        let (outcome, shown) = prompt("4\n", &items);
        assert_eq!(outcome, PickOutcome::Chosen(3));
        assert!(shown.contains(&items[3].description()));
        assert!(shown.contains("[1-8]"));
    }

    #[test]
    fn test_prompt_empty_line_cancels() {
        let items = build_candidates(Guid::new(), Categories::default());
        assert_eq!(prompt("\n", &items).0, PickOutcome::Canceled);
    }

    #[test]
    fn test_prompt_eof_cancels() {
        let items = build_candidates(Guid::new(), Categories::default());
        assert_eq!(prompt("", &items).0, PickOutcome::Canceled);
    }

    #[test]
    fn test_prompt_retries_unknown_label() {
        let items = build_candidates(Guid::new(), Categories::default());
        let (outcome, shown) = prompt("9\n 2 \n", &items);
        assert_eq!(outcome, PickOutcome::Chosen(1));
        assert!(shown.contains("No format labelled '9'."));
    }

    #[test]
    fn test_prompt_empty_list_cancels_without_reading() {
        let (outcome, shown) = prompt("1\n", &[]);
        assert_eq!(outcome, PickOutcome::Canceled);
        assert!(shown.is_empty());
    }

    #[test]
    fn test_label_picker() {
        let items = build_candidates(Guid::new(), Categories::NONE);
        assert_eq!(
            LabelPicker::new("3").pick(&items).unwrap(),
            PickOutcome::Chosen(2)
        );

        let err = LabelPicker::new("4").pick(&items).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnknownLabel(_))
        ));
    }
}
