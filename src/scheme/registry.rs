//! Filesystem-backed scheme registry

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use super::{
    Discovery, SchemeDescriptor, SchemeError, SchemeLocation, SchemeRegistry, DEFAULT_SCHEME_ICON,
};
use crate::locale::LocalizedText;

/// Subdirectory of the extension root holding scheme manifests
pub const SCHEME_DIR: &str = "schemes";

/// File extension of scheme manifests
pub const SCHEME_EXTENSION: &str = "json";

#[derive(Debug, Deserialize)]
struct SchemeManifest {
    name: LocalizedText,
    #[serde(default)]
    description: LocalizedText,
    #[serde(default)]
    icon: Option<String>,
}

/// Scheme registry reading `<root>/schemes/*.json`
#[derive(Debug, Clone)]
pub struct DirectorySchemeRegistry<L: SchemeLocation> {
    location: L,
}

impl<L: SchemeLocation> DirectorySchemeRegistry<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// Directory that [`SchemeRegistry::discover`] lists
    pub fn scheme_dir(&self) -> io::Result<PathBuf> {
        Ok(self.location.root()?.join(SCHEME_DIR))
    }
}

impl<L: SchemeLocation> SchemeRegistry for DirectorySchemeRegistry<L> {
    fn discover(&self) -> io::Result<Discovery> {
        let dir = self.scheme_dir()?;
        let mut discovery = Discovery::default();

        // Filesystem order is kept; the first parsed scheme becomes the default
        for entry in fs::read_dir(&dir)? {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "unreadable scheme directory entry");
                    discovery.unreadable += 1;
                    continue;
                }
            };
            if !is_scheme_file(&path) {
                continue;
            }

            // Follows symlinks, so a linked manifest counts and a dangling link is unreadable
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => discovery.files.push(path),
                Ok(_) => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unreadable scheme file");
                    discovery.unreadable += 1;
                }
            }
        }

        Ok(discovery)
    }

    fn parse(&self, path: &Path) -> Result<SchemeDescriptor, SchemeError> {
        parse_scheme_file(path)
    }
}

/// Read one manifest into a [`SchemeDescriptor`]
pub fn parse_scheme_file(path: &Path) -> Result<SchemeDescriptor, SchemeError> {
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SchemeError::MissingStem(path.to_path_buf()))?
        .to_string();

    let contents = fs::read_to_string(path).map_err(|source| SchemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: SchemeManifest =
        serde_json::from_str(&contents).map_err(|source| SchemeError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(SchemeDescriptor {
        id,
        display_name: manifest.name,
        description: manifest.description,
        icon: manifest
            .icon
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| DEFAULT_SCHEME_ICON.to_string()),
        source: path.to_path_buf(),
    })
}

fn is_scheme_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(SCHEME_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_icon_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "vi.json", r#"{"name": "Vi", "description": "modal"}"#);
        let scheme = parse_scheme_file(&path).unwrap();
        assert_eq!(scheme.id, "vi");
        assert_eq!(scheme.icon, DEFAULT_SCHEME_ICON);
    }

    #[test]
    fn test_empty_icon_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "vi.json", r#"{"name": "Vi", "icon": ""}"#);
        assert_eq!(parse_scheme_file(&path).unwrap().icon, DEFAULT_SCHEME_ICON);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "broken.json", "{ not json");
        assert!(matches!(
            parse_scheme_file(&path),
            Err(SchemeError::Json { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_link_is_counted_and_linked_manifest_kept() {
        use std::os::unix::fs::symlink;

        let root = TempDir::new().unwrap();
        let schemes = root.path().join(SCHEME_DIR);
        fs::create_dir(&schemes).unwrap();
        let real = write(root.path(), "vi.json", r#"{"name": "Vi"}"#);
        symlink(&real, schemes.join("vi.json")).unwrap();
        symlink(root.path().join("gone.json"), schemes.join("ghost.json")).unwrap();
        write(&schemes, "emacs.json", r#"{"name": "Emacs"}"#);

        let registry = DirectorySchemeRegistry::new(crate::scheme::BundleLocation::new(root.path()));
        let discovery = registry.discover().unwrap();

        assert_eq!(discovery.files.len(), 2);
        assert_eq!(discovery.unreadable, 1);

        let catalog = crate::scheme::load_catalog(&registry).unwrap();
        assert_eq!(catalog.schemes.len(), 2);
        assert_eq!(catalog.skipped, 1);
    }

    #[test]
    fn test_scheme_file_filter() {
        assert!(is_scheme_file(Path::new("emacs.json")));
        assert!(is_scheme_file(Path::new("EMACS.JSON")));
        assert!(!is_scheme_file(Path::new("emacs.js")));
        assert!(!is_scheme_file(Path::new(".json")));
    }
}
