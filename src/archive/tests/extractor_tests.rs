//! Tests for selective extraction

extern crate std;

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use crate::archive::SelectiveExtractor;
use crate::errors::SkycellError;
use super::test_utils::{files_under, write_plain_tarball, write_tarball_with_symlink, write_test_tarball};

const MEMBERS: &[(&str, &[u8])] = &[
    ("a1.fits", b"image" as &[u8]),
    ("a1.wt.fits", b"weight" as &[u8]),
    ("a1.mask.fits", b"mask" as &[u8]),
    ("a1.txt", b"notes" as &[u8]),
];

#[test]
fn test_extracts_only_wanted_members() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("stack.tgz");
    write_test_tarball(&archive, MEMBERS);
    let out = dir.path().join("output");

    let extracted = SelectiveExtractor::new().extract(&archive, &out).unwrap();

    let expected: BTreeSet<PathBuf> = ["a1.fits", "a1.wt.fits", "a1.mask.fits"].iter().map(PathBuf::from).collect();
    std::assert_eq!(extracted.into_iter().collect::<BTreeSet<_>>(), expected);
    std::assert_eq!(files_under(&out).into_iter().collect::<BTreeSet<_>>(), expected);
    std::assert_eq!(fs::read(out.join("a1.wt.fits")).unwrap(), b"weight");
}

#[test]
fn test_preserves_internal_paths() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("nested.tgz");
    write_test_tarball(&archive, &[
        ("20230101/skycell.1779.041.stk.g.5236.fits", b"g" as &[u8]),
        ("20230101/skycell.1779.041.stk.g.5236.exp.fits", b"exp" as &[u8]),
    ]);
    let out = dir.path().join("out");

    SelectiveExtractor::new().extract(&archive, &out).unwrap();

    std::assert_eq!(files_under(&out), vec![PathBuf::from("20230101/skycell.1779.041.stk.g.5236.fits")]);
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("stack.tgz");
    write_test_tarball(&archive, MEMBERS);
    let out = dir.path().join("output");
    let extractor = SelectiveExtractor::new();

    extractor.extract(&archive, &out).unwrap();
    let first = files_under(&out);
    fs::write(out.join("a1.fits"), b"stale").unwrap();

    extractor.extract(&archive, &out).unwrap();
    std::assert_eq!(files_under(&out), first);
    std::assert_eq!(fs::read(out.join("a1.fits")).unwrap(), b"image");
}

#[test]
fn test_plain_tar() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("stack.tar");
    write_plain_tarball(&archive, MEMBERS);

    let extracted = SelectiveExtractor::new().extract(&archive, dir.path().join("o")).unwrap();
    std::assert_eq!(extracted.len(), 3);
}

#[test]
fn test_missing_archive() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.tgz");

    match SelectiveExtractor::new().extract(&missing, dir.path().join("out")) {
        Err(SkycellError::ArchiveError { path, .. }) => std::assert_eq!(path, missing),
        other => std::panic!("unexpected result: {:?}", other),
    }
    // Output directory is created before the archive is opened
    std::assert!(dir.path().join("out").is_dir());
}

#[test]
fn test_empty_file_is_archive_error() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("interrupted.tgz");
    fs::write(&empty, b"").unwrap();

    match SelectiveExtractor::new().extract(&empty, dir.path().join("out")) {
        Err(SkycellError::ArchiveError { path, source }) => {
            std::assert_eq!(path, empty);
            std::assert_eq!(source.kind(), std::io::ErrorKind::UnexpectedEof);
        }
        other => std::panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_links_are_not_extracted() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("linked.tgz");
    write_tarball_with_symlink(&archive, "a1.fits", "b1.fits");
    let out = dir.path().join("out");

    let extracted = SelectiveExtractor::new().extract(&archive, &out).unwrap();

    std::assert_eq!(extracted, vec![PathBuf::from("a1.fits")]);
    std::assert_eq!(files_under(&out), vec![PathBuf::from("a1.fits")]);
}
