//! Selective extraction of image, weight and mask members from tarballs

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use flate2::read::GzDecoder;
use log::{debug, info, warn};
use tar::Archive;

use crate::errors::{SkycellError, SkycellResult};
use super::suffix::matching_category;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Extracts the members of an archive that match the suffix rules
pub struct SelectiveExtractor;

impl Default for SelectiveExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectiveExtractor {
    /// Create an extractor using the image, weight-map and mask rules
    pub fn new() -> Self {
        SelectiveExtractor
    }

    /// Extract the wanted members of one archive
    ///
    /// The output directory is created if needed. Matching members are
    /// written below it under their internal path, overwriting earlier
    /// copies; everything else is skipped. Only regular files are
    /// extracted, so links and directories are skipped even when their
    /// names match.
    ///
    /// # Arguments
    /// * `archive_path` - Gzip-compressed or plain tar archive
    /// * `output_dir` - Directory to extract into
    ///
    /// # Returns
    /// Internal paths of the extracted members, or an `ArchiveError` if the
    /// archive cannot be opened or read (an empty file counts as unreadable)
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(&self, archive_path: P, output_dir: Q) -> SkycellResult<Vec<PathBuf>> {
        let archive_path = archive_path.as_ref();
        let output_dir = output_dir.as_ref();
        let archive_error = |source: io::Error| SkycellError::ArchiveError {
            path: archive_path.to_path_buf(),
            source,
        };

        fs::create_dir_all(output_dir)?;
        info!("Extracting {} into {}", archive_path.display(), output_dir.display());

        let reader = open_archive(archive_path).map_err(archive_error)?;
        let mut archive = Archive::new(reader);
        archive.set_overwrite(true);

        let mut extracted = Vec::new();
        for entry in archive.entries().map_err(archive_error)? {
            let mut entry = entry.map_err(archive_error)?;
            if !entry.header().entry_type().is_file() {
                continue;
            }

            let member = entry.path().map_err(archive_error)?.into_owned();
            let member_name = member.to_string_lossy();
            let Some(category) = matching_category(&member_name) else {
                debug!("Skipping {}", member_name);
                continue;
            };

            if entry.unpack_in(output_dir).map_err(archive_error)? {
                debug!("Extracted {} ({})", member_name, category);
                extracted.push(member);
            } else {
                warn!("Refusing to extract {} outside {}", member_name, output_dir.display());
            }
        }

        info!("Extracted {} member(s) from {}", extracted.len(), archive_path.display());
        Ok(extracted)
    }
}

/// Open an archive, transparently decompressing gzip
fn open_archive(path: &Path) -> io::Result<Box<dyn Read>> {
    let mut reader = BufReader::new(File::open(path)?);
    let head = reader.fill_buf()?;
    if head.is_empty() {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "empty file"));
    }
    let is_gzip = head.starts_with(&GZIP_MAGIC);

    if is_gzip {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}
