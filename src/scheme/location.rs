//! Where the extension's bundled files live
//!
//! Newer hosts hand out the extension's resource root directly. Older hosts
//! only know the install location, under which the extension sits in a
//! directory named after its id. Pick one at startup.

use std::io;
use std::path::PathBuf;

/// Resolves the extension root directory
pub trait SchemeLocation {
    fn root(&self) -> io::Result<PathBuf>;
}

impl<T: SchemeLocation + ?Sized> SchemeLocation for Box<T> {
    fn root(&self) -> io::Result<PathBuf> {
        (**self).root()
    }
}

/// Resource root known directly
#[derive(Debug, Clone)]
pub struct BundleLocation {
    root: PathBuf,
}

impl BundleLocation {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SchemeLocation for BundleLocation {
    fn root(&self) -> io::Result<PathBuf> {
        existing_dir(self.root.clone())
    }
}

/// Install location plus extension id
#[derive(Debug, Clone)]
pub struct InstallLocation {
    location: PathBuf,
    extension_id: String,
}

impl InstallLocation {
    pub fn new(location: impl Into<PathBuf>, extension_id: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            extension_id: extension_id.into(),
        }
    }
}

impl SchemeLocation for InstallLocation {
    fn root(&self) -> io::Result<PathBuf> {
        existing_dir(self.location.join(&self.extension_id))
    }
}

fn existing_dir(path: PathBuf) -> io::Result<PathBuf> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("extension root not found: {}", path.display()),
        ))
    }
}
