//! CLI commands.

mod config;
mod insert;
mod list;
mod new;
mod parse;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use iguid_catalog::Categories;

use crate::config::{default_path, Overrides, Settings};
use crate::output::OutputFormat;

/// guid - generate GUIDs and insert a chosen rendering.
#[derive(Debug, Parser)]
#[command(name = "guid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, short = 'o', global = true, default_value = "table")]
    output: String,

    /// Settings file (defaults to the platform config directory).
    #[arg(long, global = true, env = "GUID_CONFIG")]
    config: Option<PathBuf>,

    /// Offer plain lowercase forms.
    #[arg(long, global = true, env = "GUID_SHOW_LOWERCASE", value_name = "BOOL", action = ArgAction::Set)]
    lowercase: Option<bool>,

    /// Offer plain uppercase forms.
    #[arg(long, global = true, env = "GUID_SHOW_UPPERCASE", value_name = "BOOL", action = ArgAction::Set)]
    uppercase: Option<bool>,

    /// Offer code snippet declarations.
    #[arg(long, global = true, env = "GUID_SHOW_SNIPPETS", value_name = "BOOL", action = ArgAction::Set)]
    snippets: Option<bool>,

    /// Log debug output to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new GUIDs.
    New(new::NewCommand),

    /// Parse a GUID and render it again.
    Parse(parse::ParseCommand),

    /// Show the pick list for a fresh GUID.
    List(list::ListCommand),

    /// Pick a rendering and insert it at one or more points.
    Insert(insert::InsertCommand),

    /// Show or change saved settings.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let format = OutputFormat::from_name(&self.output);

        let settings_path = match self.config {
            Some(path) => path,
            None => default_path()?,
        };
        let settings = Settings::load_from(&settings_path)?;

        let overrides = Overrides {
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            snippets: self.snippets,
        };

        let ctx = CommandContext {
            categories: settings.categories_with(overrides),
            settings,
            settings_path,
            overrides,
            format,
        };

        match self.command {
            Commands::New(cmd) => cmd.run(ctx),
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::List(cmd) => cmd.run(ctx),
            Commands::Insert(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("guid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    /// Settings as stored on disk.
    pub settings: Settings,
    pub settings_path: PathBuf,
    /// Category overrides from flags and environment.
    pub overrides: Overrides,
    /// Categories after flag and environment overrides.
    pub categories: Categories,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_overrides_parse() {
        let cli = Cli::try_parse_from([
            "guid",
            "list",
            "--uppercase",
            "true",
            "--snippets",
            "false",
        ])
        .unwrap();
        assert_eq!(cli.uppercase, Some(true));
        assert_eq!(cli.snippets, Some(false));
    }

    #[test]
    fn test_config_set_takes_category_flags() {
        let cli = Cli::try_parse_from(["guid", "config", "set", "--snippets", "false"]).unwrap();
        assert_eq!(cli.snippets, Some(false));
        assert!(matches!(cli.command, Commands::Config(_)));

        assert!(Cli::try_parse_from(["guid", "config", "set", "show_code_snippets", "false"]).is_err());
    }
}
