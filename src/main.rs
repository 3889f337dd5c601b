//! rcwizard: Init Script Wizard
//!
//! Walks the user through locating or creating an init script for a keyboard
//! extension and choosing a key scheme, then prints the outcome as JSON.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use rcwizard::cli::{run_list_schemes, run_prompt_wizard, run_wizard, Cli, Commands};
use rcwizard::logging;
use rcwizard::report::display_result;
use rcwizard::utils::{print_banner, print_success, print_warning};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let _log_guard = match logging::init(&log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            print_warning("Logging disabled:", &e.to_string());
            None
        }
    };

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Schemes => run_list_schemes(&cli),
        };
    }

    let result = if cli.plain {
        print_banner(env!("CARGO_PKG_VERSION"));
        run_prompt_wizard(&cli)?
    } else {
        run_wizard(&cli)?
    };

    let json = serde_json::to_string_pretty(&result).context("Failed to encode wizard result")?;
    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write result to {}", path.display()))?;
            print_success(&format!("Result written to {}", path.display()));
        }
        None => println!("{}", json),
    }

    display_result(&result, &cli.localizer());

    Ok(())
}
