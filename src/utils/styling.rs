//! Terminal styling utilities for the prompt flow and subcommands
//!
//! Everything here writes to stderr; stdout is reserved for the result JSON.

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static KEY: Emoji<'_, '_> = Emoji("⌨️  ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print the application banner
pub fn print_banner(version: &str) {
    eprintln!();
    eprintln!(
        "    {} {}",
        KEY,
        style("rcwizard").cyan().bold()
    );
    eprintln!(
        "    {}",
        style("Set up your init script in a few steps").dim()
    );
    eprintln!("    {}", style(format!("v{}", version)).dim());
    eprintln!("    {}", style("━".repeat(50)).dim());
    eprintln!();
}

/// Print a page header with styling
pub fn print_page_header(step_num: usize, title: &str) {
    eprintln!();
    eprintln!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    eprintln!("    {}", style("─".repeat(50)).dim());
}

/// Print the directory the wizard is pointed at
pub fn print_target(path: &Path) {
    eprintln!("    {} {}", FOLDER, style(truncate_path(path, 60)).yellow());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("    {} {}", INFO, message);
}

/// Print a warning with a bold title
pub fn print_warning(title: &str, message: &str) {
    eprintln!(
        "    {} {} {}",
        WARN,
        style(title).yellow().bold(),
        message
    );
}

pub fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

/// Keep the tail of `s`, prefixed with "..." when it is too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - max_len.saturating_sub(3)).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_untouched() {
        assert_eq!(truncate_string("/home/me", 20), "/home/me");
    }

    #[test]
    fn test_long_string_keeps_tail() {
        assert_eq!(truncate_string("/very/long/path/name", 10), "...th/name");
        assert_eq!(truncate_string("/ünïcödé/päth", 8), ".../päth");
    }
}
