//! Utility modules for common functionality
//!
//! Logging and progress reporting shared by the commands and binaries.

pub mod logger;
mod progress;

pub use progress::ProgressTracker;
