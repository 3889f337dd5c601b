//! Interfaces the wizard calls out to, and the stock implementations
//!
//! The controller never touches the filesystem, the screen, or a string table
//! directly; it goes through these traits, injected via [`Collaborators`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::warn;

use crate::locale::Localizer;
use crate::scheme::SchemeRegistry;

/// Resolved reference to a filesystem location
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle(PathBuf);

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Filesystem access needed by the wizard
pub trait FileLocator {
    /// Ask the user for a directory. `Ok(None)` means the picker was cancelled.
    fn pick(&mut self, initial: &Path) -> io::Result<Option<PathBuf>>;

    /// Whether `path` + `delimiter` + any of `names` is an existing file
    fn path_has_recognized_file(&self, path: &Path, delimiter: &str, names: &[String]) -> bool;

    fn resolve(&self, path: &Path) -> io::Result<FileHandle>;
}

/// Interactive directory chooser
pub trait DirectoryPicker {
    fn pick_directory(&mut self, initial: &Path) -> io::Result<Option<PathBuf>>;
}

/// User-visible warning surface
pub trait AlertSink {
    fn warn(&mut self, title: &str, message: &str);
}

/// Everything a [`super::WizardController`] depends on
pub struct Collaborators {
    pub locator: Box<dyn FileLocator>,
    pub schemes: Box<dyn SchemeRegistry>,
    pub localizer: Box<dyn Localizer>,
    pub alerts: Box<dyn AlertSink>,
}

/// [`FileLocator`] over the real filesystem with a pluggable picker
#[derive(Debug)]
pub struct FsFileLocator<P: DirectoryPicker> {
    picker: P,
}

impl<P: DirectoryPicker> FsFileLocator<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }
}

impl<P: DirectoryPicker> FileLocator for FsFileLocator<P> {
    fn pick(&mut self, initial: &Path) -> io::Result<Option<PathBuf>> {
        self.picker.pick_directory(initial)
    }

    fn path_has_recognized_file(&self, path: &Path, delimiter: &str, names: &[String]) -> bool {
        has_recognized_file(path, delimiter, names)
    }

    fn resolve(&self, path: &Path) -> io::Result<FileHandle> {
        std::path::absolute(path).map(FileHandle)
    }
}

/// Check `path` + `delimiter` + name for each candidate name
pub fn has_recognized_file(path: &Path, delimiter: &str, names: &[String]) -> bool {
    let full = path.to_string_lossy();
    let base = full.strip_suffix(delimiter).unwrap_or(full.as_ref());
    names
        .iter()
        .any(|name| Path::new(&format!("{}{}{}", base, delimiter, name)).is_file())
}

/// An alert waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Shared FIFO of alerts, drained by whatever renders them
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    pending: Rc<RefCell<VecDeque<Alert>>>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&self) -> Option<Alert> {
        self.pending.borrow_mut().pop_front()
    }

    pub fn peek(&self) -> Option<Alert> {
        self.pending.borrow().front().cloned()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl AlertSink for AlertQueue {
    fn warn(&mut self, title: &str, message: &str) {
        warn!(title, message, "alert raised");
        self.pending.borrow_mut().push_back(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
