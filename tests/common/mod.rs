//! Shared test utilities: stub collaborators and fixture generators

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rcwizard::locale::CatalogLocalizer;
use rcwizard::scheme::{
    Discovery, SchemeDescriptor, SchemeError, SchemeRegistry, DEFAULT_SCHEME_ICON,
};
use rcwizard::wizard::{
    AlertQueue, Collaborators, FileHandle, FileLocator, HostDefaults, WizardController,
};
use tempfile::TempDir;

pub const PREF_DIR: &str = "/home/tester";

/// File locator answering picks from a script
pub struct StubLocator {
    picks: Rc<RefCell<VecDeque<Option<PathBuf>>>>,
    recognized: bool,
}

impl FileLocator for StubLocator {
    fn pick(&mut self, _initial: &Path) -> io::Result<Option<PathBuf>> {
        Ok(self.picks.borrow_mut().pop_front().flatten())
    }

    fn path_has_recognized_file(&self, _path: &Path, _delimiter: &str, _names: &[String]) -> bool {
        self.recognized
    }

    fn resolve(&self, path: &Path) -> io::Result<FileHandle> {
        Ok(FileHandle::new(path))
    }
}

/// One entry of a stub scheme source; `None` fails to parse
pub type StubScheme = (PathBuf, Option<SchemeDescriptor>);

/// Scheme registry that counts discovery calls
pub struct CountingRegistry {
    entries: Vec<StubScheme>,
    discover_calls: Rc<Cell<usize>>,
}

impl SchemeRegistry for CountingRegistry {
    fn discover(&self) -> io::Result<Discovery> {
        self.discover_calls.set(self.discover_calls.get() + 1);
        let files: Vec<PathBuf> = self.entries.iter().map(|(path, _)| path.clone()).collect();
        Ok(files.into())
    }

    fn parse(&self, path: &Path) -> Result<SchemeDescriptor, SchemeError> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .and_then(|(_, scheme)| scheme.clone())
            .ok_or_else(|| SchemeError::MissingStem(path.to_path_buf()))
    }
}

/// Controller wired to stubs, plus handles to observe them
pub struct Harness {
    pub controller: WizardController,
    pub alerts: AlertQueue,
    pub discover_calls: Rc<Cell<usize>>,
    pub picks: Rc<RefCell<VecDeque<Option<PathBuf>>>>,
}

pub fn host_defaults() -> HostDefaults {
    HostDefaults {
        pref_directory: PathBuf::from(PREF_DIR),
        init_file_names: vec![".rcwizard.js".to_string(), "_rcwizard.js".to_string()],
        directory_delimiter: "/".to_string(),
        filename_candidates: vec![".rcwizard.js".to_string(), "_rcwizard.js".to_string()],
    }
}

/// Build a harness with scripted picker answers and a scheme source
pub fn harness(picks: Vec<Option<PathBuf>>, recognized: bool, schemes: Vec<StubScheme>) -> Harness {
    let picks = Rc::new(RefCell::new(VecDeque::from(picks)));
    let discover_calls = Rc::new(Cell::new(0));
    let alerts = AlertQueue::new();

    let collaborators = Collaborators {
        locator: Box::new(StubLocator {
            picks: Rc::clone(&picks),
            recognized,
        }),
        schemes: Box::new(CountingRegistry {
            entries: schemes,
            discover_calls: Rc::clone(&discover_calls),
        }),
        localizer: Box::new(CatalogLocalizer::default()),
        alerts: Box::new(alerts.clone()),
    };

    let controller = WizardController::new(host_defaults(), collaborators)
        .expect("stub collaborators never fail");

    Harness {
        controller,
        alerts,
        discover_calls,
        picks,
    }
}

/// Harness with two good schemes and nothing scripted
pub fn default_harness() -> Harness {
    harness(
        vec![],
        true,
        vec![stub_scheme("emacs", "Emacs"), stub_scheme("vim", "Vim")],
    )
}

pub fn scheme(id: &str, name: &str) -> SchemeDescriptor {
    SchemeDescriptor {
        id: id.to_string(),
        display_name: name.into(),
        description: format!("{} style keys", name).as_str().into(),
        icon: DEFAULT_SCHEME_ICON.to_string(),
        source: PathBuf::from(format!("schemes/{}.json", id)),
    }
}

pub fn stub_scheme(id: &str, name: &str) -> StubScheme {
    (
        PathBuf::from(format!("schemes/{}.json", id)),
        Some(scheme(id, name)),
    )
}

pub fn broken_scheme(file: &str) -> StubScheme {
    (PathBuf::from(format!("schemes/{}", file)), None)
}

/// Create `<root>/schemes` with the given files and return the root
pub fn create_scheme_dir(files: &[(&str, &str)]) -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    let dir = root.path().join("schemes");
    fs::create_dir_all(&dir).expect("Failed to create scheme dir");
    for (name, contents) in files {
        fs::write(dir.join(name), contents).expect("Failed to write scheme file");
    }
    root
}

pub const EMACS_MANIFEST: &str = r#"{
    "name": {"en": "Emacs", "ja": "Emacs 風"},
    "description": {"en": "Emacs-like bindings"},
    "icon": "icon/emacs.png"
}"#;

pub const VIM_MANIFEST: &str = r#"{ "name": "Vim" }"#;
