use std::ops::Deref;
use std::path::{Path, PathBuf};
use log::{info, warn};

use crate::archive::{ArchiveLocator, SelectiveExtractor};
use crate::batch::{BatchDispatcher, BatchJob};
use crate::config::Config;
use crate::coordinate::SkyPosition;
use crate::errors::SkycellResult;
use crate::skycell::{SkycellResolution, SkycellResolver};
use crate::utils::logger::Logger;
use crate::utils::ProgressTracker;

/// Outcome of a full lookup and extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSummary {
    /// Skycell chosen for the position
    pub resolution: SkycellResolution,
    /// Archives extracted inline
    pub extracted: Vec<PathBuf>,
    /// Batch jobs submitted for the remaining archives
    pub jobs: Vec<BatchJob>,
    /// Archives neither extracted nor dispatched
    pub skipped: Vec<PathBuf>,
}

/// Run logger owned by the facade or lent to it by a command
enum RunLogger<'a> {
    Owned(Logger),
    Borrowed(&'a Logger),
}

impl Deref for RunLogger<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        match self {
            RunLogger::Owned(logger) => logger,
            RunLogger::Borrowed(logger) => logger,
        }
    }
}

/// Main interface to the skycellkit library
pub struct SkycellKit<'a> {
    config: Config,
    logger: RunLogger<'a>,
    show_progress: bool,
}

impl SkycellKit<'static> {
    /// Create a new SkycellKit instance
    ///
    /// # Arguments
    /// * `config` - Lookup, storage and batch configuration
    /// * `log_file` - Optional path to log file, defaults to "skycellkit.log"
    ///
    /// # Returns
    /// A SkycellKit instance or an error if the log file cannot be created
    pub fn new(config: Config, log_file: Option<&Path>) -> SkycellResult<Self> {
        let log_path = log_file.unwrap_or_else(|| Path::new("skycellkit.log"));
        let logger = Logger::new(log_path)?;
        Ok(SkycellKit {
            config,
            logger: RunLogger::Owned(logger),
            show_progress: false,
        })
    }
}

impl<'a> SkycellKit<'a> {
    /// Create a SkycellKit that records into an existing logger
    pub fn with_logger(config: Config, logger: &'a Logger) -> Self {
        SkycellKit {
            config,
            logger: RunLogger::Borrowed(logger),
            show_progress: false,
        }
    }

    /// Show a progress bar while extracting archives inline
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the best skycell for a position
    pub fn resolve(&self, position: &SkyPosition) -> SkycellResult<SkycellResolution> {
        let resolution = SkycellResolver::from_config(&self.config)?.resolve(position)?;
        self.logger.log_resolution(&resolution)?;
        Ok(resolution)
    }

    /// List the archives of a skycell under the configured storage root
    pub fn locate(&self, skycell: &str) -> SkycellResult<Vec<PathBuf>> {
        ArchiveLocator::from_config(&self.config.storage).locate(skycell)
    }

    /// Extract one archive into a directory
    ///
    /// # Returns
    /// Internal paths of the extracted members
    pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(&self, archive: P, output_dir: Q) -> SkycellResult<Vec<PathBuf>> {
        let archive = archive.as_ref();
        let extracted = SelectiveExtractor::new().extract(archive, output_dir)?;
        self.logger.log(&format!("Extracted from {}", archive.display()))?;
        self.logger.log_archives("Members", &extracted)?;
        Ok(extracted)
    }

    /// Write and submit one batch job per archive
    pub fn dispatch(&self, archives: &[PathBuf]) -> SkycellResult<Vec<BatchJob>> {
        let jobs = BatchDispatcher::new(self.config.batch.clone(), &self.config.extract.output_dir)
            .dispatch_all(archives)?;
        let scripts: Vec<PathBuf> = jobs.iter().map(|job| job.script_path.clone()).collect();
        self.logger.log_archives("Batch jobs", &scripts)?;
        Ok(jobs)
    }

    /// Resolve, locate and extract in one go
    ///
    /// The first `count` archives are extracted into the configured output
    /// directory. The rest are dispatched as batch jobs when `dispatch` is
    /// set and reported as skipped otherwise. Finding no archive is not an
    /// error; the summary is then empty apart from the resolution.
    pub fn fetch(&self, position: &SkyPosition, count: usize, dispatch: bool) -> SkycellResult<FetchSummary> {
        let resolution = self.resolve(position)?;
        let archives = self.locate(resolution.skycell())?;
        if archives.is_empty() {
            warn!(
                "No archives for skycell {} under {}",
                resolution.skycell(),
                self.config.storage.root.display()
            );
        }

        let split = count.min(archives.len());
        let (inline, remaining) = archives.split_at(split);

        self.logger.log_archives("Inline extraction", inline)?;
        self.extract_inline(inline)?;

        let (jobs, skipped) = if dispatch {
            (self.dispatch(remaining)?, Vec::new())
        } else {
            if !remaining.is_empty() {
                info!("{} archive(s) left; rerun with --dispatch to submit them as batch jobs", remaining.len());
                self.logger.log_archives("Not processed", remaining)?;
            }
            (Vec::new(), remaining.to_vec())
        };

        info!("Fetch finished: {} extracted, {} dispatched, {} skipped", inline.len(), jobs.len(), skipped.len());

        Ok(FetchSummary {
            resolution,
            extracted: inline.to_vec(),
            jobs,
            skipped,
        })
    }

    fn extract_inline(&self, archives: &[PathBuf]) -> SkycellResult<()> {
        if archives.is_empty() {
            return Ok(());
        }

        let output_dir = &self.config.extract.output_dir;
        let progress = self
            .show_progress
            .then(|| ProgressTracker::new(archives.len() as u64, "Extracting"));

        for archive in archives {
            if let (Some(progress), Some(name)) = (&progress, archive.file_name()) {
                progress.set_message(&name.to_string_lossy());
            }
            self.extract(archive, output_dir)?;
            if let Some(progress) = &progress {
                progress.increment(1);
            }
        }

        if let Some(progress) = &progress {
            progress.finish();
        }
        Ok(())
    }
}
