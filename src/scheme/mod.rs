//! Key scheme templates offered when creating a new init file
//!
//! A scheme is a JSON manifest in the extension's `schemes` directory. The
//! [`SchemeRegistry`] trait is the discovery/parse contract the wizard consumes;
//! [`DirectorySchemeRegistry`] is the filesystem implementation, with the
//! extension root found through a [`SchemeLocation`] strategy.

pub mod location;
pub mod registry;

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::locale::LocalizedText;

pub use location::{BundleLocation, InstallLocation, SchemeLocation};
pub use registry::{parse_scheme_file, DirectorySchemeRegistry, SCHEME_DIR, SCHEME_EXTENSION};

/// Icon shown for schemes whose manifest has none
pub const DEFAULT_SCHEME_ICON: &str = "icon/empty.png";

/// One discoverable key scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeDescriptor {
    /// Derived from the manifest file name
    pub id: String,
    pub display_name: LocalizedText,
    pub description: LocalizedText,
    pub icon: String,
    pub source: PathBuf,
}

/// Errors reading a single scheme file
///
/// These never abort discovery; the file is left out of the catalog.
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("failed to read scheme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid scheme manifest {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scheme file {0} has no usable name")]
    MissingStem(PathBuf),
}

/// Discovery and parsing of scheme files
pub trait SchemeRegistry {
    /// List candidate scheme files, in filesystem order.
    ///
    /// Only a failure to open the source itself is an error; entries that
    /// cannot be inspected are counted in [`Discovery::unreadable`].
    fn discover(&self) -> io::Result<Discovery>;

    fn parse(&self, path: &Path) -> Result<SchemeDescriptor, SchemeError>;
}

impl<T: SchemeRegistry + ?Sized> SchemeRegistry for Box<T> {
    fn discover(&self) -> io::Result<Discovery> {
        (**self).discover()
    }

    fn parse(&self, path: &Path) -> Result<SchemeDescriptor, SchemeError> {
        (**self).parse(path)
    }
}

/// Candidate files found by [`SchemeRegistry::discover`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Entries skipped because they could not be read
    pub unreadable: usize,
}

impl From<Vec<PathBuf>> for Discovery {
    fn from(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            unreadable: 0,
        }
    }
}

/// Schemes that parsed, plus a count of the files that did not
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeCatalog {
    pub schemes: Vec<SchemeDescriptor>,
    pub skipped: usize,
}

impl SchemeCatalog {
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.schemes.iter().position(|s| s.id == id)
    }
}

/// Discover and parse every scheme, dropping files that fail in place.
///
/// Only a failure to list the directory itself is returned as an error.
/// Unreadable entries and unparsable files both count as skipped.
pub fn load_catalog<R: SchemeRegistry + ?Sized>(registry: &R) -> io::Result<SchemeCatalog> {
    let discovery = registry.discover()?;
    let mut catalog = SchemeCatalog {
        schemes: Vec::with_capacity(discovery.files.len()),
        skipped: discovery.unreadable,
    };

    for path in discovery.files {
        match registry.parse(&path) {
            Ok(scheme) => {
                debug!(id = %scheme.id, "loaded key scheme");
                catalog.schemes.push(scheme);
            }
            Err(e) => {
                warn!(error = %e, "skipping scheme file");
                catalog.skipped += 1;
            }
        }
    }

    Ok(catalog)
}
