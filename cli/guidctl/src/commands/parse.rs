//! Parse command.

use anyhow::Result;
use clap::Args;
use iguid_id::Guid;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::new::RenderedGuid;
use super::CommandContext;

/// Parse a GUID (braces optional, any case) and render it again.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// The GUID to parse, or `0` for the all-zero GUID.
    text: String,

    /// Render selector: braced (b), struct (x), no-hyphen; anything else is hyphenated.
    #[arg(long, short = 'f')]
    format: Option<String>,

    /// Upper-case the rendered text.
    #[arg(long, short = 'u')]
    upper: bool,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let guid = Guid::parse(&self.text).map_err(CliError::from)?;
        let rendered = RenderedGuid::new(guid, self.format.as_deref(), self.upper);

        match ctx.format {
            OutputFormat::Json => print_single(&rendered),
            OutputFormat::Table => println!("{}", rendered.text),
        }

        Ok(())
    }
}
