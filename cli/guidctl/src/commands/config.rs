//! Settings commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Show or change saved settings.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show saved and effective settings.
    Show,

    /// Save the categories given with --lowercase, --uppercase and --snippets.
    ///
    /// Values taken from GUID_SHOW_* environment variables are saved too.
    Set,
}

#[derive(Debug, Serialize)]
struct SettingsView {
    path: String,
    show_lowercase: bool,
    show_uppercase: bool,
    show_code_snippets: bool,
    effective: EffectiveView,
}

#[derive(Debug, Serialize)]
struct EffectiveView {
    show_lowercase: bool,
    show_uppercase: bool,
    show_code_snippets: bool,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Set => set(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let stored = ctx.settings.categories;
    let view = SettingsView {
        path: ctx.settings_path.display().to_string(),
        show_lowercase: stored.lowercase,
        show_uppercase: stored.uppercase,
        show_code_snippets: stored.snippets,
        effective: EffectiveView {
            show_lowercase: ctx.categories.lowercase,
            show_uppercase: ctx.categories.uppercase,
            show_code_snippets: ctx.categories.snippets,
        },
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!(
                "show_lowercase: {} (effective {})",
                view.show_lowercase, view.effective.show_lowercase
            );
            println!(
                "show_uppercase: {} (effective {})",
                view.show_uppercase, view.effective.show_uppercase
            );
            println!(
                "show_code_snippets: {} (effective {})",
                view.show_code_snippets, view.effective.show_code_snippets
            );
        }
    }

    Ok(())
}

fn set(mut ctx: CommandContext) -> Result<()> {
    if ctx.overrides.is_empty() {
        return Err(CliError::NothingToSet.into());
    }

    ctx.settings.apply(ctx.overrides);
    ctx.settings.save_to(&ctx.settings_path)?;

    let saved = ctx.settings.categories;
    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({
            "ok": true,
            "show_lowercase": saved.lowercase,
            "show_uppercase": saved.uppercase,
            "show_code_snippets": saved.snippets,
        })),
        OutputFormat::Table => print_success(&format!(
            "Saved show_lowercase = {}, show_uppercase = {}, show_code_snippets = {}",
            saved.lowercase, saved.uppercase, saved.snippets
        )),
    }

    Ok(())
}
