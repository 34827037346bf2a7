mod common;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use iso_chooser::catalog::{CatalogError, ChoiceList, SelectionError};
use iso_chooser::ChooserError;

use common::{catalog, iso_product, simple_catalog, write_catalog};

#[test]
fn test_one_choice_per_catalog_in_input_order() {
    let dir = tempdir().unwrap();
    let paths = vec![
        write_catalog(dir.path(), "noble.json", &simple_catalog("noble")),
        write_catalog(dir.path(), "jammy.json", &simple_catalog("jammy")),
        write_catalog(dir.path(), "focal.json", &simple_catalog("focal")),
    ];

    let choices = ChoiceList::build(&paths, "amd64", None).unwrap();

    assert_eq!(choices.len(), 3);
    let urls: Vec<&str> = choices.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://releases.ubuntu.com/noble/ubuntu-noble-live-server-amd64.iso",
            "https://releases.ubuntu.com/jammy/ubuntu-jammy-live-server-amd64.iso",
            "https://releases.ubuntu.com/focal/ubuntu-focal-live-server-amd64.iso",
        ]
    );
}

#[test]
fn test_same_catalog_twice_gives_two_entries() {
    let dir = tempdir().unwrap();
    let path = write_catalog(dir.path(), "noble.json", &simple_catalog("noble"));

    let choices = ChoiceList::build(&[path.clone(), path], "amd64", None).unwrap();
    assert_eq!(choices.len(), 2);
    assert_eq!(choices.get(0), choices.get(1));
}

#[test]
fn test_one_failed_selection_aborts_everything() {
    let dir = tempdir().unwrap();
    let arm_only = catalog(&[(
        "server:arm64",
        iso_product("arm64", "20240101", "https://example.com/arm64.iso", "a", 1),
    )]);
    let paths = vec![
        write_catalog(dir.path(), "good.json", &simple_catalog("noble")),
        write_catalog(dir.path(), "arm.json", &arm_only),
        write_catalog(dir.path(), "also-good.json", &simple_catalog("jammy")),
    ];

    match ChoiceList::build(&paths, "amd64", None) {
        Err(ChooserError::Selection { path, source }) => {
            assert_eq!(path, paths[1]);
            assert!(matches!(source, SelectionError::NoMatchingProduct { .. }));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_malformed_catalog_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let paths = vec![
        write_catalog(dir.path(), "broken.json", "{\"products\": {"),
        write_catalog(dir.path(), "good.json", &simple_catalog("noble")),
    ];

    match ChoiceList::build(&paths, "amd64", None) {
        Err(ChooserError::Catalog { path, source }) => {
            assert_eq!(path, paths[0]);
            assert!(matches!(source, CatalogError::Parse(_)));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    assert!(matches!(
        ChoiceList::build(&[missing], "amd64", None),
        Err(ChooserError::CatalogRead { .. })
    ));
}

#[test]
fn test_no_catalogs() {
    let paths: Vec<std::path::PathBuf> = Vec::new();
    assert!(matches!(
        ChoiceList::build(&paths, "amd64", None),
        Err(ChooserError::NoCatalogs)
    ));
}

#[test]
fn test_mirror_applies_to_every_catalog() {
    let dir = tempdir().unwrap();
    let relative = catalog(&[(
        "server",
        iso_product("amd64", "20240101", "releases/noble/x.iso", "x", 1),
    )]);
    let paths = vec![
        write_catalog(dir.path(), "relative.json", &relative),
        write_catalog(dir.path(), "absolute.json", &simple_catalog("jammy")),
    ];

    let choices = ChoiceList::build(&paths, "amd64", Some("http://mirror.example/ubuntu")).unwrap();
    assert_eq!(
        choices.get(0).unwrap().url,
        "http://mirror.example/ubuntu/releases/noble/x.iso"
    );
    assert_eq!(
        choices.get(1).unwrap().url,
        "https://releases.ubuntu.com/jammy/ubuntu-jammy-live-server-amd64.iso"
    );

    assert!(matches!(
        ChoiceList::build(&paths, "amd64", None),
        Err(ChooserError::Selection {
            source: SelectionError::RelativePath { .. },
            ..
        })
    ));
}
