//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log
//! crate, writing every record to a file and echoing it to the console.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::skycell::SkycellResolution;

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a skycell resolution as a short summary block
    pub fn log_resolution(&self, resolution: &SkycellResolution) -> io::Result<()> {
        self.log(&format!("skycell: {}", resolution.skycell()))?;
        self.log(&format!(
            "  x: {}, y: {}, candidates: {}",
            resolution.best.x, resolution.best.y, resolution.candidate_count
        ))
    }

    /// Logs a list of archive paths under a heading
    pub fn log_archives(&self, heading: &str, archives: &[PathBuf]) -> io::Result<()> {
        self.log(&format!("{} ({}):", heading, archives.len()))?;
        for archive in archives {
            self.log(&format!("  {}", archive.display()))?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?;

        // Only called once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Console only gets info and above
            if record.level() <= Level::Info {
                println!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skycell::{SkycellCandidate, SkycellResolution};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_summary_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        let logger = Logger::new(&path).unwrap();

        let resolution = SkycellResolution {
            best: SkycellCandidate::new("1779.041", 3000.0, 2000.5),
            candidate_count: 2,
        };
        logger.log_resolution(&resolution).unwrap();
        logger.log_archives("Inline", &[PathBuf::from("a.tgz")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "skycell: 1779.041\n  x: 3000, y: 2000.5, candidates: 2\nInline (1):\n  a.tgz\n"
        );
    }
}
