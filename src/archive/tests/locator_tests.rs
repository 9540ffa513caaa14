//! Tests for archive discovery

extern crate std;

use std::fs;
use tempfile::tempdir;

use crate::archive::ArchiveLocator;
use crate::config::Config;

fn default_patterns() -> Vec<String> {
    Config::default().storage.patterns
}

#[test]
fn test_locate_across_subdirectories() {
    let root = tempdir().unwrap();
    fs::create_dir(root.path().join("2023")).unwrap();
    fs::write(root.path().join("2023/rings.v3.skycell.1779.041.stk.g.tgz"), b"x").unwrap();
    fs::write(root.path().join("rings.v3.skycell.1779.041.stk.r.tgz"), b"x").unwrap();
    fs::write(root.path().join("rings.v3.skycell.1779.042.stk.r.tgz"), b"x").unwrap();
    fs::write(root.path().join("rings.v3.skycell.1779.041.stk.r.txt"), b"x").unwrap();

    let locator = ArchiveLocator::new(root.path(), default_patterns());
    let found = locator.locate("1779.041").unwrap();

    std::assert_eq!(found.len(), 2);
    // Subdirectory pattern comes first
    std::assert_eq!(found[0], root.path().join("2023/rings.v3.skycell.1779.041.stk.g.tgz"));
    std::assert_eq!(found[1], root.path().join("rings.v3.skycell.1779.041.stk.r.tgz"));
}

#[test]
fn test_no_match_is_empty() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("rings.v3.skycell.1779.042.tgz"), b"x").unwrap();

    let locator = ArchiveLocator::new(root.path(), default_patterns());
    std::assert!(locator.locate("2381.064").unwrap().is_empty());
}

#[test]
fn test_missing_root_is_empty() {
    let root = tempdir().unwrap();
    let locator = ArchiveLocator::new(root.path().join("does-not-exist"), default_patterns());
    std::assert!(locator.locate("2381.064").unwrap().is_empty());
}

#[test]
fn test_duplicates_listed_once() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.0001.000.tgz"), b"x").unwrap();

    let patterns = vec!["{root}/*{skycell}*.tgz".to_string(), "{root}/a.{skycell}.tgz".to_string()];
    let locator = ArchiveLocator::new(root.path(), patterns);
    std::assert_eq!(locator.locate("0001.000").unwrap().len(), 1);
}

#[test]
fn test_glob_characters_escaped() {
    let locator = ArchiveLocator::new("/data/[x]", vec!["{root}/*{skycell}*.tgz".to_string()]);
    std::assert_eq!(locator.patterns_for("1.0*"), vec!["/data/[[]x[]]/*1.0[*]*.tgz".to_string()]);
}
