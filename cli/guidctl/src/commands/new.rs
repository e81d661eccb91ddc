//! Generate commands.

use anyhow::Result;
use clap::Args;
use iguid_id::Guid;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Generate one or more GUIDs.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Render selector: braced (b), struct (x), no-hyphen; anything else is hyphenated.
    #[arg(long, short = 'f')]
    format: Option<String>,

    /// Upper-case the rendered text.
    #[arg(long, short = 'u')]
    upper: bool,

    /// Number of GUIDs to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct RenderedGuid {
    pub guid: Guid,
    pub text: String,
}

impl RenderedGuid {
    pub fn new(guid: Guid, selector: Option<&str>, upper: bool) -> Self {
        let text = guid.render(selector);
        let text = if upper { text.to_uppercase() } else { text };
        Self { guid, text }
    }
}

impl NewCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rendered: Vec<RenderedGuid> = (0..self.count)
            .map(|_| RenderedGuid::new(Guid::new(), self.format.as_deref(), self.upper))
            .collect();

        match ctx.format {
            OutputFormat::Json => print_single(&rendered),
            OutputFormat::Table => {
                for item in &rendered {
                    println!("{}", item.text);
                }
            }
        }

        Ok(())
    }
}
