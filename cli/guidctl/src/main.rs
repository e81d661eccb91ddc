//! guidctl (guid) - generate GUIDs and insert them where you need them
//!
//! Offers a numbered list of renderings for a fresh GUID and inserts the
//! chosen one at one or more positions of a buffer.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod edit;
mod error;
mod logging;
mod output;
mod picker;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose());

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
