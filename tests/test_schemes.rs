//! Tests for scheme discovery on a real directory tree

mod common;

use std::fs;

use common::{create_scheme_dir, EMACS_MANIFEST, VIM_MANIFEST};
use rcwizard::locale::{CatalogLocalizer, Localizer};
use rcwizard::scheme::{
    load_catalog, BundleLocation, DirectorySchemeRegistry, InstallLocation, SchemeLocation,
    SchemeRegistry, DEFAULT_SCHEME_ICON,
};
use tempfile::TempDir;

#[test]
fn test_bad_manifest_is_counted_not_fatal() {
    let root = create_scheme_dir(&[("emacs.json", EMACS_MANIFEST), ("broken.json", "{ nope")]);
    let registry = DirectorySchemeRegistry::new(BundleLocation::new(root.path()));

    let catalog = load_catalog(&registry).unwrap();

    assert_eq!(catalog.schemes.len(), 1);
    assert_eq!(catalog.skipped, 1);
    assert_eq!(catalog.schemes[0].id, "emacs");
    assert_eq!(catalog.schemes[0].icon, "icon/emacs.png");
}

#[test]
fn test_non_manifest_files_are_ignored() {
    let root = create_scheme_dir(&[
        ("vim.json", VIM_MANIFEST),
        ("README.md", "# schemes"),
        ("vim.json.bak", VIM_MANIFEST),
    ]);
    fs::create_dir(root.path().join("schemes").join("nested.json")).unwrap();
    let registry = DirectorySchemeRegistry::new(BundleLocation::new(root.path()));

    let found = registry.discover().unwrap();

    assert_eq!(found.files.len(), 1);
    assert_eq!(found.unreadable, 0);
    assert!(found.files[0].ends_with("vim.json"));
}

#[test]
fn test_manifest_translations_resolve_by_locale() {
    let root = create_scheme_dir(&[("emacs.json", EMACS_MANIFEST), ("vim.json", VIM_MANIFEST)]);
    let registry = DirectorySchemeRegistry::new(BundleLocation::new(root.path()));
    let catalog = load_catalog(&registry).unwrap();

    let emacs = &catalog.schemes[catalog.position("emacs").unwrap()];
    let vim = &catalog.schemes[catalog.position("vim").unwrap()];

    assert_eq!(CatalogLocalizer::new("ja-JP").lookup(&emacs.display_name), "Emacs 風");
    assert_eq!(CatalogLocalizer::new("fr").lookup(&emacs.display_name), "Emacs");
    assert_eq!(CatalogLocalizer::default().lookup(&vim.display_name), "Vim");
    assert_eq!(vim.icon, DEFAULT_SCHEME_ICON);
}

#[test]
fn test_missing_scheme_dir_is_a_discovery_error() {
    let root = TempDir::new().unwrap();
    let registry = DirectorySchemeRegistry::new(BundleLocation::new(root.path()));

    assert!(load_catalog(&registry).is_err());
}

#[test]
fn test_install_location_joins_extension_id() {
    let location = TempDir::new().unwrap();
    let extension = location.path().join("rcwizard@example.org");
    fs::create_dir_all(extension.join("schemes")).unwrap();
    fs::write(extension.join("schemes").join("vim.json"), VIM_MANIFEST).unwrap();

    let strategy = InstallLocation::new(location.path(), "rcwizard@example.org");
    assert_eq!(strategy.root().unwrap(), extension);

    let registry = DirectorySchemeRegistry::new(strategy);
    let catalog = load_catalog(&registry).unwrap();
    assert_eq!(catalog.schemes.len(), 1);

    let wrong_id = InstallLocation::new(location.path(), "other@example.org");
    assert!(wrong_id.root().is_err());
}

#[test]
fn test_both_strategies_work_behind_a_box() {
    let root = create_scheme_dir(&[("vim.json", VIM_MANIFEST)]);
    let strategies: Vec<Box<dyn SchemeLocation>> = vec![
        Box::new(BundleLocation::new(root.path())),
        Box::new(InstallLocation::new(
            root.path().parent().unwrap(),
            root.path().file_name().unwrap().to_string_lossy(),
        )),
    ];

    for strategy in strategies {
        let registry = DirectorySchemeRegistry::new(strategy);
        assert_eq!(registry.scheme_dir().unwrap(), root.path().join("schemes"));
    }
}
