//! Insert command.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use iguid_catalog::build_candidates;
use iguid_id::Guid;
use serde::Serialize;
use tracing::info;

use crate::edit::{apply, EditOutcome, Selection};
use crate::output::{print_info, print_single, print_success, OutputFormat};
use crate::picker::{LabelPicker, PickOutcome, Picker, PromptPicker};

use super::CommandContext;

/// Pick a rendering and insert it at one or more points.
///
/// With --unique, GUIDs are handed out to every --at point in the order
/// given, then to every --select point. Without --at or --select the text is
/// appended to the buffer. Without
/// --file the buffer starts empty and the result goes to stdout.
#[derive(Debug, Args)]
pub struct InsertCommand {
    /// File to edit in place.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Insert at this byte offset (repeatable).
    #[arg(long = "at", value_name = "OFFSET", value_parser = Selection::parse_caret)]
    at: Vec<Selection>,

    /// Replace this byte range (repeatable).
    #[arg(long = "select", value_name = "START:END", value_parser = Selection::parse_range)]
    select: Vec<Selection>,

    /// Choose the candidate with this label instead of prompting.
    #[arg(long)]
    pick: Option<String>,

    /// Give every insertion point its own GUID.
    #[arg(long)]
    unique: bool,
}

#[derive(Debug, Serialize)]
struct InsertReceipt<'a> {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a PathBuf>,
    #[serde(flatten)]
    outcome: &'a EditOutcome,
}

impl InsertCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let buffer = match &self.file {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?,
            None => String::new(),
        };

        // All --at points in order, then all --select points in order.
        let mut points: Vec<Selection> = self.at.iter().chain(&self.select).copied().collect();
        if points.is_empty() {
            points.push(Selection::caret(buffer.len()));
        }

        let mut candidates = build_candidates(Guid::new(), ctx.categories);

        let outcome = match &self.pick {
            Some(label) => LabelPicker::new(label.as_str()).pick(&candidates)?,
            None => {
                let stdin = io::stdin();
                PromptPicker::new(stdin.lock(), io::stderr()).pick(&candidates)?
            }
        };

        let PickOutcome::Chosen(index) = outcome else {
            print_info("Selection canceled; nothing inserted.");
            return Ok(());
        };

        let mut item = candidates.swap_remove(index);
        let edited = apply(&buffer, &points, &mut item, self.unique)?;

        info!(
            label = %item.label(),
            points = points.len(),
            unique = self.unique,
            "Inserted GUID text"
        );
        for range in &edited.placeholders {
            info!(start = range.start, end = range.end, "Placeholder to rename");
        }

        if let Some(path) = &self.file {
            fs::write(path, &edited.text)
                .with_context(|| format!("Failed to write {:?}", path))?;
        }

        match ctx.format {
            OutputFormat::Json => print_single(&InsertReceipt {
                label: item.label(),
                path: self.file.as_ref(),
                outcome: &edited,
            }),
            OutputFormat::Table => match &self.file {
                Some(path) => print_success(&format!(
                    "Inserted at {} point(s) in {}",
                    points.len(),
                    path.display()
                )),
                None => print!("{}", edited.text),
            },
        }

        Ok(())
    }
}
