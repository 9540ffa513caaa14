//! Job script writing and queue submission

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as Process;
use log::{debug, info, warn};

use crate::config::BatchConfig;
use crate::errors::SkycellResult;
use super::script::BatchScript;

/// A job written to disk and handed to the queue
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    /// Zero-based job index
    pub index: usize,
    /// Archive the job extracts
    pub archive: PathBuf,
    /// Path of the generated script
    pub script_path: PathBuf,
}

/// Writes one job script per archive and submits it
pub struct BatchDispatcher {
    config: BatchConfig,
    output_dir: PathBuf,
}

impl BatchDispatcher {
    /// Create a dispatcher
    ///
    /// # Arguments
    /// * `config` - Script location, header, extractor and submit commands
    /// * `output_dir` - Directory the jobs extract into
    pub fn new<P: AsRef<Path>>(config: BatchConfig, output_dir: P) -> Self {
        BatchDispatcher {
            config,
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the script for a job index
    pub fn script_path(&self, index: usize) -> PathBuf {
        self.config
            .script_dir
            .join(format!("{}{}.sh", self.config.script_prefix, index))
    }

    /// Write the job script for one archive and submit it
    ///
    /// Only writing the script can fail. The submission command's exit
    /// status, or its failure to start, is logged and otherwise ignored.
    pub fn dispatch(&self, index: usize, archive: &Path) -> SkycellResult<BatchJob> {
        let script = BatchScript::render(
            &self.config.header,
            &self.config.extractor_command,
            index,
            archive,
            &self.output_dir,
        );

        let script_path = self.script_path(index);
        fs::create_dir_all(&self.config.script_dir)?;
        fs::write(&script_path, script.to_text())?;
        make_executable(&script_path)?;
        debug!("Wrote job script {} running: {}", script_path.display(), script.command());

        self.submit(&script_path);

        Ok(BatchJob {
            index,
            archive: archive.to_path_buf(),
            script_path,
        })
    }

    /// Dispatch every archive, numbering jobs from zero
    pub fn dispatch_all(&self, archives: &[PathBuf]) -> SkycellResult<Vec<BatchJob>> {
        info!("Dispatching {} batch job(s)", archives.len());
        archives
            .iter()
            .enumerate()
            .map(|(index, archive)| self.dispatch(index, archive))
            .collect()
    }

    fn submit(&self, script_path: &Path) {
        info!("Submitting {} with {}", script_path.display(), self.config.submit_command);

        match Process::new(&self.config.submit_command).arg(script_path).status() {
            Ok(status) => debug!("{} exited with {}", self.config.submit_command, status),
            Err(e) => warn!("Could not run {}: {}", self.config.submit_command, e),
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
