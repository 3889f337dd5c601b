//! Init script configuration wizard
//!
//! This module holds the frontend-independent part of the wizard: the page
//! state machine, the session data it accumulates, and the result it hands
//! back. Terminal frontends live in `crate::cli`.
//!
//! # Architecture
//!
//! - `WizardController`: state machine owning the current page and session data
//! - `WizardPage`: one variant per page, plus the two terminal pages
//! - `WizardState`: the decisions accumulated so far
//! - `WizardResult`: the value handed back when the wizard closes
//!
//! # Flow
//!
//! 1. Method selection (create a new init file, or use an existing one)
//! 2. Create: pick a target directory, then a key scheme
//! 3. Select: pick a directory that already has an init file
//! 4. Finish (validated against the path actually taken) or cancel

pub mod collaborators;
pub mod error;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::scheme::{load_catalog, SchemeCatalog, SchemeDescriptor};

pub use collaborators::{
    Alert, AlertQueue, AlertSink, Collaborators, DirectoryPicker, FileHandle, FileLocator,
    FsFileLocator,
};
pub use error::WizardError;

// ============================================================================
// Host Defaults
// ============================================================================

/// Values the host supplies when it opens the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDefaults {
    /// Starting directory for the target and for the picker
    pub pref_directory: PathBuf,
    /// File names that count as an existing init file
    pub init_file_names: Vec<String>,
    /// Separator placed between a directory and a file name
    pub directory_delimiter: String,
    /// Names offered for the init file; the result carries the chosen index
    pub filename_candidates: Vec<String>,
}

/// Special keys the frontends offer for customization, with stock bindings
pub const SPECIAL_KEYS: &[(&str, &str)] = &[
    ("quit", "C-g"),
    ("help", "<f1>"),
    ("escape", "C-q"),
    ("macroStart", "<f3>"),
    ("macroEnd", "<f4>"),
    ("universalArgument", "C-u"),
    ("negativeArgument1", "C--"),
];

// ============================================================================
// Core Result Types
// ============================================================================

/// How the user wants to get an init file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Write a new init file from a key scheme
    Create,
    /// Use an init file that already exists
    Select,
}

impl Method {
    /// Map a list index to a method (0 = Create, anything else = Select)
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            Method::Create
        } else {
            Method::Select
        }
    }
}

/// Outcome of a completed wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedWizard {
    pub method: Method,
    pub path: PathBuf,
    pub filename_index: usize,
    pub filename: String,
    /// Present exactly when `method` is [`Method::Create`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<SchemeDescriptor>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub key_bindings: BTreeMap<String, String>,
}

/// Terminal value handed back to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// User cancelled; nothing should be written
    Cancelled,
    /// User finished with a consistent set of choices
    Completed(Box<CompletedWizard>),
}

impl WizardResult {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, WizardResult::Cancelled)
    }

    pub fn completed(&self) -> Option<&CompletedWizard> {
        match self {
            WizardResult::Completed(done) => Some(&**done),
            WizardResult::Cancelled => None,
        }
    }
}

impl Serialize for WizardResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Completed<'a> {
            cancelled: bool,
            #[serde(flatten)]
            result: &'a CompletedWizard,
        }

        match self {
            WizardResult::Cancelled => {
                let mut s = serializer.serialize_struct("WizardResult", 1)?;
                s.serialize_field("cancelled", &true)?;
                s.end()
            }
            WizardResult::Completed(result) => Completed {
                cancelled: false,
                result: result.as_ref(),
            }
            .serialize(serializer),
        }
    }
}

/// What a path change request did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChange {
    /// Picker was cancelled
    Unchanged,
    /// Target now points at this directory
    Changed(PathBuf),
}

// ============================================================================
// Page Definitions
// ============================================================================

/// Wizard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPage {
    SelectMethod,
    CreateRcFile,
    SelectRcFile,
    /// Only reachable from `CreateRcFile`
    SchemePick,
    Finished,
    Cancelled,
}

impl WizardPage {
    /// Get the display title for this page
    pub fn title(&self) -> &'static str {
        match self {
            WizardPage::SelectMethod => "Select Method",
            WizardPage::CreateRcFile => "Create Init File",
            WizardPage::SelectRcFile => "Select Init File",
            WizardPage::SchemePick => "Key Scheme",
            WizardPage::Finished => "Finished",
            WizardPage::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardPage::Finished | WizardPage::Cancelled)
    }
}

impl fmt::Display for WizardPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// Session Data
// ============================================================================

/// Target directory together with its resolved handle.
///
/// Built only through [`RcTarget::resolve`] and replaced as a whole, so the
/// path and the handle always name the same place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RcTarget {
    path: PathBuf,
    handle: FileHandle,
}

impl RcTarget {
    pub fn resolve(locator: &dyn FileLocator, path: PathBuf) -> std::io::Result<Self> {
        let handle = locator.resolve(&path)?;
        Ok(Self { path, handle })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn handle(&self) -> &FileHandle {
        &self.handle
    }
}

/// Decisions accumulated across pages
#[derive(Debug, Clone)]
pub struct WizardState {
    selected_method: Option<Method>,
    target: RcTarget,
    chosen_scheme: Option<usize>,
    chosen_filename_index: usize,
    special_key_bindings: BTreeMap<String, String>,
}

impl WizardState {
    fn new(target: RcTarget) -> Self {
        Self {
            selected_method: None,
            target,
            chosen_scheme: None,
            chosen_filename_index: 0,
            special_key_bindings: BTreeMap::new(),
        }
    }

    pub fn selected_method(&self) -> Option<Method> {
        self.selected_method
    }

    pub fn target(&self) -> &RcTarget {
        &self.target
    }

    pub fn chosen_filename_index(&self) -> usize {
        self.chosen_filename_index
    }

    pub fn special_key_bindings(&self) -> &BTreeMap<String, String> {
        &self.special_key_bindings
    }

    /// Every entry of [`SPECIAL_KEYS`] with its current binding, stock when unset
    pub fn special_keys_with_stock(&self) -> Vec<(String, String)> {
        SPECIAL_KEYS
            .iter()
            .map(|(name, stock)| {
                let key = self
                    .special_key_bindings
                    .get(*name)
                    .map(String::as_str)
                    .unwrap_or(stock);
                (name.to_string(), key.to_string())
            })
            .collect()
    }
}

// ============================================================================
// Wizard State Machine
// ============================================================================

/// Drives the wizard from method selection to a [`WizardResult`]
pub struct WizardController {
    page: WizardPage,
    defaults: HostDefaults,
    collaborators: Collaborators,
    state: WizardState,
    /// Loaded once per session
    catalog: Option<SchemeCatalog>,
}

impl WizardController {
    /// Create a controller on the first page, targeting the preference directory
    pub fn new(defaults: HostDefaults, collaborators: Collaborators) -> Result<Self, WizardError> {
        let target = RcTarget::resolve(
            collaborators.locator.as_ref(),
            defaults.pref_directory.clone(),
        )?;

        Ok(Self {
            page: WizardPage::SelectMethod,
            defaults,
            collaborators,
            state: WizardState::new(target),
            catalog: None,
        })
    }

    pub fn page(&self) -> WizardPage {
        self.page
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn defaults(&self) -> &HostDefaults {
        &self.defaults
    }

    /// Loaded schemes, empty until [`Self::load_schemes`] runs
    pub fn schemes(&self) -> &[SchemeDescriptor] {
        self.catalog
            .as_ref()
            .map(|c| c.schemes.as_slice())
            .unwrap_or_default()
    }

    /// Scheme files that failed to parse in this session
    pub fn skipped_schemes(&self) -> usize {
        self.catalog.as_ref().map(|c| c.skipped).unwrap_or(0)
    }

    pub fn chosen_scheme(&self) -> Option<&SchemeDescriptor> {
        self.state
            .chosen_scheme
            .and_then(|index| self.schemes().get(index))
    }

    pub fn chosen_filename(&self) -> Option<&str> {
        self.defaults
            .filename_candidates
            .get(self.state.chosen_filename_index)
            .map(String::as_str)
    }

    /// Localized description of the chosen scheme
    pub fn scheme_description(&self) -> Option<String> {
        self.chosen_scheme()
            .map(|scheme| self.collaborators.localizer.lookup(&scheme.description))
    }

    /// Localized display name of any scheme
    pub fn scheme_name(&self, scheme: &SchemeDescriptor) -> String {
        self.collaborators.localizer.lookup(&scheme.display_name)
    }

    /// Look up a catalog message through the injected localizer
    pub fn message(&self, key: &str, args: &[&str]) -> String {
        self.collaborators.localizer.message(key, args)
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.page.is_terminal() {
            Err(WizardError::Closed { page: self.page })
        } else {
            Ok(())
        }
    }

    fn go_to(&mut self, page: WizardPage) -> WizardPage {
        debug!(from = %self.page, to = %page, "wizard page change");
        self.page = page;
        page
    }

    /// Record the method chosen on the first page and move to its page
    pub fn choose_method(&mut self, method_index: usize) -> Result<WizardPage, WizardError> {
        self.ensure_open()?;

        let method = Method::from_index(method_index);
        self.state.selected_method = Some(method);

        let next = match method {
            Method::Create => WizardPage::CreateRcFile,
            Method::Select => WizardPage::SelectRcFile,
        };
        Ok(self.go_to(next))
    }

    /// Move forward from the create page to the scheme page, loading schemes
    pub fn advance(&mut self) -> Result<WizardPage, WizardError> {
        self.ensure_open()?;

        if self.page == WizardPage::CreateRcFile {
            self.load_schemes()?;
            return Ok(self.go_to(WizardPage::SchemePick));
        }
        Ok(self.page)
    }

    /// Move back one page
    pub fn back(&mut self) -> Result<WizardPage, WizardError> {
        self.ensure_open()?;

        let previous = match self.page {
            WizardPage::SchemePick => WizardPage::CreateRcFile,
            WizardPage::CreateRcFile | WizardPage::SelectRcFile => WizardPage::SelectMethod,
            other => other,
        };
        Ok(self.go_to(previous))
    }

    /// Ask the picker for a new target directory.
    ///
    /// On the select page the directory must already hold an init file; if it
    /// does not, an alert is raised and the target is left alone.
    pub fn request_path_change(&mut self, for_select_page: bool) -> Result<PathChange, WizardError> {
        self.ensure_open()?;

        let picked = self
            .collaborators
            .locator
            .pick(&self.defaults.pref_directory)?;
        let Some(path) = picked else {
            debug!("directory picker cancelled");
            return Ok(PathChange::Unchanged);
        };

        if for_select_page
            && !self.collaborators.locator.path_has_recognized_file(
                &path,
                &self.defaults.directory_delimiter,
                &self.defaults.init_file_names,
            )
        {
            let title = self.message("alertTitle", &[]);
            let body = self.message("noUserScriptFound", &[&path.display().to_string()]);
            self.collaborators.alerts.warn(&title, &body);
            return Err(WizardError::NoScriptFound { path });
        }

        self.state.target = RcTarget::resolve(self.collaborators.locator.as_ref(), path)?;
        info!(path = %self.state.target.path().display(), "target directory changed");
        Ok(PathChange::Changed(self.state.target.path().to_path_buf()))
    }

    /// Discover and parse schemes once per session.
    ///
    /// Later calls return the cached list. The first scheme that parsed is
    /// selected by default.
    pub fn load_schemes(&mut self) -> Result<&[SchemeDescriptor], WizardError> {
        self.ensure_open()?;

        if self.catalog.is_none() {
            let catalog = match load_catalog(self.collaborators.schemes.as_ref()) {
                Ok(catalog) => catalog,
                Err(e) => {
                    warn!(error = %e, "scheme discovery failed");
                    SchemeCatalog::default()
                }
            };

            if catalog.skipped > 0 {
                warn!(skipped = catalog.skipped, "some scheme files were skipped");
            }
            info!(loaded = catalog.schemes.len(), "key schemes loaded");

            self.state.chosen_scheme = if catalog.is_empty() { None } else { Some(0) };
            self.catalog = Some(catalog);
        }

        Ok(self.schemes())
    }

    /// Choose a loaded scheme by id
    pub fn select_scheme(&mut self, id: &str) -> Result<(), WizardError> {
        self.ensure_open()?;

        let index = self
            .catalog
            .as_ref()
            .and_then(|c| c.position(id))
            .ok_or_else(|| WizardError::UnknownScheme { id: id.to_string() })?;
        self.state.chosen_scheme = Some(index);
        Ok(())
    }

    /// Choose which candidate file name the init file gets
    pub fn select_filename(&mut self, index: usize) -> Result<(), WizardError> {
        self.ensure_open()?;

        let len = self.defaults.filename_candidates.len();
        if index >= len {
            return Err(WizardError::InvalidFilenameIndex { index, len });
        }
        self.state.chosen_filename_index = index;
        Ok(())
    }

    /// Merge special key bindings, overwriting per key
    pub fn set_special_key_bindings<I>(&mut self, bindings: I) -> Result<(), WizardError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.ensure_open()?;
        self.state.special_key_bindings.extend(bindings);
        Ok(())
    }

    /// Validate the session and close the wizard with a completed result.
    ///
    /// On error the wizard stays on its current page.
    pub fn finish(&mut self) -> Result<WizardResult, WizardError> {
        self.ensure_open()?;

        let method = self
            .state
            .selected_method
            .ok_or(WizardError::MethodNotChosen)?;

        let filename_index = self.state.chosen_filename_index;
        let filename = self
            .chosen_filename()
            .ok_or(WizardError::InvalidFilenameIndex {
                index: filename_index,
                len: self.defaults.filename_candidates.len(),
            })?
            .to_string();

        let scheme = match method {
            Method::Create => Some(
                self.chosen_scheme()
                    .cloned()
                    .ok_or(WizardError::NoSchemeAvailable)?,
            ),
            Method::Select => None,
        };

        let result = CompletedWizard {
            method,
            path: self.state.target.path().to_path_buf(),
            filename_index,
            filename,
            scheme,
            key_bindings: self.state.special_key_bindings.clone(),
        };

        info!(method = ?result.method, path = %result.path.display(), "wizard finished");
        self.go_to(WizardPage::Finished);
        Ok(WizardResult::Completed(Box::new(result)))
    }

    /// Close the wizard without a result. Fails only after [`Self::finish`].
    pub fn cancel(&mut self) -> Result<WizardResult, WizardError> {
        if self.page == WizardPage::Finished {
            return Err(WizardError::Closed { page: self.page });
        }

        info!("wizard cancelled");
        self.go_to(WizardPage::Cancelled);
        Ok(WizardResult::Cancelled)
    }
}
