//! Local tarball handling
//!
//! This module finds the survey tarballs belonging to a skycell and pulls the
//! image, weight-map and mask members out of them.

mod suffix;
mod locator;
mod extractor;
#[cfg(test)]
mod tests;

pub use suffix::{default_rules, matching_category, ExtractionSuffixRule};
pub use locator::ArchiveLocator;
pub use extractor::SelectiveExtractor;
