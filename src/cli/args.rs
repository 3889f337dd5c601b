//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{PathBuf, MAIN_SEPARATOR_STR};

use crate::locale::CatalogLocalizer;
use crate::scheme::{BundleLocation, DirectorySchemeRegistry, InstallLocation, SchemeLocation};
use crate::wizard::{AlertSink, Collaborators, DirectoryPicker, FsFileLocator, HostDefaults};

/// rcwizard - Locate or create your init script and pick a key scheme
#[derive(Parser, Debug)]
#[command(name = "rcwizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory the wizard starts in and offers by default.
    /// Defaults to the home directory.
    #[arg(short, long)]
    pub pref_dir: Option<PathBuf>,

    /// Init file name to recognize (repeatable). The same names are offered
    /// when creating a new init file, in this order.
    #[arg(long = "init-file", default_values = [".rcwizard.js", "_rcwizard.js"])]
    pub init_files: Vec<String>,

    /// Separator placed between a directory and an init file name
    #[arg(long, default_value = MAIN_SEPARATOR_STR)]
    pub delimiter: String,

    /// Extension resource root containing a `schemes` directory.
    /// Defaults to the current directory.
    #[arg(long, global = true, conflicts_with = "install_location")]
    pub schemes_root: Option<PathBuf>,

    /// Legacy install location; the extension lives in a subdirectory named by --extension-id
    #[arg(long, global = true)]
    pub install_location: Option<PathBuf>,

    /// Extension id used with --install-location
    #[arg(long, global = true, default_value = "rcwizard@example.org")]
    pub extension_id: String,

    /// Special key binding as NAME=KEY (repeatable), e.g. --key quit=C-g
    #[arg(short = 'k', long = "key", value_parser = parse_key_binding)]
    pub keys: Vec<(String, String)>,

    /// Use line-oriented prompts instead of the full-screen interface
    #[arg(long, default_value = "false")]
    pub plain: bool,

    /// Write the result JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Locale used for scheme names and descriptions
    #[arg(long, global = true, default_value = "en")]
    pub locale: String,

    /// Directory for the log file. Defaults to the platform data directory.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the key schemes the wizard would offer
    Schemes,
}

impl Cli {
    /// Host defaults derived from the flags
    pub fn host_defaults(&self) -> HostDefaults {
        let pref_directory = self
            .pref_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        HostDefaults {
            pref_directory,
            init_file_names: self.init_files.clone(),
            directory_delimiter: self.delimiter.clone(),
            filename_candidates: self.init_files.clone(),
        }
    }

    /// Extension root strategy: legacy install location when given, bundle root otherwise
    pub fn scheme_location(&self) -> Box<dyn SchemeLocation> {
        match (&self.install_location, &self.schemes_root) {
            (Some(location), _) => Box::new(InstallLocation::new(location, &self.extension_id)),
            (None, Some(root)) => Box::new(BundleLocation::new(root)),
            (None, None) => Box::new(BundleLocation::new(".")),
        }
    }

    pub fn localizer(&self) -> CatalogLocalizer {
        CatalogLocalizer::new(&self.locale)
    }

    /// Wire the filesystem collaborators around a frontend's picker and alert sink
    pub fn collaborators<P>(&self, picker: P, alerts: Box<dyn AlertSink>) -> Collaborators
    where
        P: DirectoryPicker + 'static,
    {
        Collaborators {
            locator: Box::new(FsFileLocator::new(picker)),
            schemes: Box::new(DirectorySchemeRegistry::new(self.scheme_location())),
            localizer: Box::new(self.localizer()),
            alerts,
        }
    }
}

/// Validator for --key NAME=KEY
fn parse_key_binding(s: &str) -> Result<(String, String), String> {
    let (name, key) = s
        .split_once('=')
        .ok_or_else(|| format!("'{}' is not in NAME=KEY form", s))?;
    let (name, key) = (name.trim(), key.trim());

    if name.is_empty() {
        return Err(format!("'{}' has an empty key name", s));
    }
    if key.is_empty() {
        return Err(format!("'{}' has an empty key", s));
    }
    Ok((name.to_string(), key.to_string()))
}
