//! Discovery of the tarballs belonging to a skycell

use std::path::{Path, PathBuf};
use glob::{glob, Pattern};
use log::{debug, info, warn};

use crate::config::StorageConfig;
use crate::errors::{SkycellError, SkycellResult};

/// Finds archive files whose names embed a skycell identifier
pub struct ArchiveLocator {
    root: PathBuf,
    patterns: Vec<String>,
}

impl ArchiveLocator {
    /// Create a locator over a storage root
    ///
    /// # Arguments
    /// * `root` - Root directory of the tarball store
    /// * `patterns` - Glob templates using `{root}` and `{skycell}` placeholders
    pub fn new<P: AsRef<Path>>(root: P, patterns: Vec<String>) -> Self {
        ArchiveLocator {
            root: root.as_ref().to_path_buf(),
            patterns,
        }
    }

    /// Create a locator from the storage configuration
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(&storage.root, storage.patterns.clone())
    }

    /// Storage root searched by this locator
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Glob patterns searched for a skycell, with placeholders filled in
    pub fn patterns_for(&self, skycell: &str) -> Vec<String> {
        let root = Pattern::escape(&self.root.to_string_lossy());
        let skycell = Pattern::escape(skycell);

        self.patterns
            .iter()
            .map(|template| template.replace("{root}", &root).replace("{skycell}", &skycell))
            .collect()
    }

    /// Find the archives for a skycell
    ///
    /// Results follow pattern order, then filesystem enumeration order. A
    /// path matched by several patterns is listed once. No match is an empty
    /// vector.
    pub fn locate(&self, skycell: &str) -> SkycellResult<Vec<PathBuf>> {
        let mut found: Vec<PathBuf> = Vec::new();

        for pattern in self.patterns_for(skycell) {
            debug!("Searching archives with pattern: {}", pattern);

            let entries = glob(&pattern).map_err(|e| {
                SkycellError::ConfigError(format!("Invalid archive pattern '{}': {}", pattern, e))
            })?;

            for entry in entries {
                match entry {
                    Ok(path) => {
                        if !found.contains(&path) {
                            found.push(path);
                        }
                    }
                    Err(e) => warn!("Skipping unreadable path {}: {}", e.path().display(), e),
                }
            }
        }

        info!("Found {} archive(s) for skycell {}", found.len(), skycell);
        Ok(found)
    }
}
