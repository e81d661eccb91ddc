//! List command.

use anyhow::Result;
use clap::Args;
use iguid_catalog::{build_candidates, Candidate};
use iguid_id::Guid;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Show the pick list for a fresh GUID.
#[derive(Debug, Args)]
pub struct ListCommand {}

#[derive(Debug, Serialize, Tabled)]
struct CandidateRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Text")]
    description: String,
    #[tabled(rename = "Placeholder")]
    has_placeholder: bool,
}

impl From<&Candidate<'_>> for CandidateRow {
    fn from(candidate: &Candidate<'_>) -> Self {
        Self {
            label: candidate.label(),
            description: candidate.description(),
            has_placeholder: candidate.has_placeholder(),
        }
    }
}

impl ListCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let candidates = build_candidates(Guid::new(), ctx.categories);
        let rows: Vec<CandidateRow> = candidates.iter().map(CandidateRow::from).collect();
        print_output(&rows, ctx.format);
        Ok(())
    }
}
