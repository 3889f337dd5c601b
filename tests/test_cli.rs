//! Tests for CLI argument parsing and the `schemes` subcommand

mod common;

use std::path::{PathBuf, MAIN_SEPARATOR_STR};

use assert_cmd::Command;
use clap::Parser;
use common::{create_scheme_dir, EMACS_MANIFEST, VIM_MANIFEST};
use predicates::prelude::*;
use rcwizard::cli::{Cli, Commands};
use tempfile::TempDir;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["rcwizard"]);

    assert!(cli.command.is_none());
    assert_eq!(cli.init_files, [".rcwizard.js", "_rcwizard.js"]);
    assert_eq!(cli.delimiter, MAIN_SEPARATOR_STR);
    assert_eq!(cli.extension_id, "rcwizard@example.org");
    assert_eq!(cli.locale, "en");
    assert!(!cli.plain, "Default should be the full-screen wizard");
    assert!(cli.keys.is_empty());
}

#[test]
fn test_host_defaults_from_flags() {
    let cli = Cli::parse_from([
        "rcwizard",
        "--pref-dir",
        "/home/me",
        "--init-file",
        "init.js",
        "--delimiter",
        "/",
    ]);

    let defaults = cli.host_defaults();
    assert_eq!(defaults.pref_directory, PathBuf::from("/home/me"));
    assert_eq!(defaults.init_file_names, ["init.js"]);
    assert_eq!(defaults.filename_candidates, ["init.js"]);
    assert_eq!(defaults.directory_delimiter, "/");
}

#[test]
fn test_key_bindings_parse_in_order() {
    let cli = Cli::parse_from(["rcwizard", "--key", "quit=C-g", "-k", "help=<f1>"]);

    assert_eq!(
        cli.keys,
        [
            ("quit".to_string(), "C-g".to_string()),
            ("help".to_string(), "<f1>".to_string())
        ]
    );
}

#[test]
fn test_malformed_key_binding_is_rejected() {
    assert!(Cli::try_parse_from(["rcwizard", "--key", "quit"]).is_err());
}

#[test]
fn test_schemes_root_conflicts_with_install_location() {
    let result = Cli::try_parse_from([
        "rcwizard",
        "--schemes-root",
        "a",
        "--install-location",
        "b",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_schemes_subcommand_accepts_global_flags() {
    let cli = Cli::parse_from(["rcwizard", "schemes", "--schemes-root", "/opt/ext", "--locale", "ja"]);

    assert!(matches!(cli.command, Some(Commands::Schemes)));
    assert_eq!(cli.schemes_root, Some(PathBuf::from("/opt/ext")));
    assert_eq!(cli.localizer().locale(), "ja");
}

#[test]
fn test_schemes_command_lists_catalog() {
    let root = create_scheme_dir(&[
        ("emacs.json", EMACS_MANIFEST),
        ("vim.json", VIM_MANIFEST),
        ("broken.json", "not json"),
    ]);
    let logs = TempDir::new().unwrap();

    Command::cargo_bin("rcwizard")
        .unwrap()
        .arg("--log-dir")
        .arg(logs.path())
        .arg("schemes")
        .arg("--schemes-root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("emacs"))
        .stdout(predicate::str::contains("Vim"))
        .stderr(predicate::str::contains("1 file(s) skipped"));

    assert!(logs.path().join("rcwizard.log").exists());
}

#[test]
fn test_schemes_command_fails_without_scheme_dir() {
    let root = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();

    Command::cargo_bin("rcwizard")
        .unwrap()
        .arg("--log-dir")
        .arg(logs.path())
        .arg("schemes")
        .arg("--schemes-root")
        .arg(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read schemes"));
}

#[test]
fn test_help_mentions_plain_mode() {
    Command::cargo_bin("rcwizard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--plain"));
}
