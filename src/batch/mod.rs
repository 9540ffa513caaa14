//! Cluster batch jobs
//!
//! Archives not extracted inline are handed to the cluster: one job script
//! per archive, each running the extractor as a subprocess, submitted to the
//! job queue without waiting for or checking the outcome.

mod script;
mod dispatcher;

pub use script::BatchScript;
pub use dispatcher::{BatchDispatcher, BatchJob};
