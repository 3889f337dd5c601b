//! `rcwizard schemes`: list the key schemes the wizard would offer

use anyhow::{Context, Result};
use console::style;

use super::args::Cli;
use crate::report::scheme_table;
use crate::scheme::{load_catalog, DirectorySchemeRegistry};
use crate::utils::{create_spinner, finish_with_success, finish_with_warning, print_info};

/// Scan the configured scheme directory and print the catalog as a table
pub fn run_list_schemes(cli: &Cli) -> Result<()> {
    let registry = DirectorySchemeRegistry::new(cli.scheme_location());
    let localizer = cli.localizer();

    let scheme_dir = registry
        .scheme_dir()
        .context("Failed to locate the scheme directory")?;

    eprintln!(
        "\n {} Scanning key schemes",
        style("◆").cyan().bold()
    );
    eprintln!("   Directory: {}", style(scheme_dir.display()).dim());
    eprintln!();

    let spinner = create_spinner("Reading scheme manifests...");
    let catalog = load_catalog(&registry)
        .with_context(|| format!("Failed to read schemes from {}", scheme_dir.display()))?;

    if catalog.is_empty() {
        finish_with_warning(&spinner, "No usable key scheme found");
    } else {
        finish_with_success(
            &spinner,
            &format!("{} key scheme(s) loaded", catalog.schemes.len()),
        );
        println!("{}", scheme_table(&catalog, &localizer));
    }

    if catalog.skipped > 0 {
        print_info(&format!(
            "{} file(s) skipped: not a valid scheme manifest",
            catalog.skipped
        ));
    }

    Ok(())
}
