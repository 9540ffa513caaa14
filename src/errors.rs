//! Custom error types for skycell lookup and archive handling

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while resolving skycells, extracting archives or dispatching jobs
#[derive(Debug)]
pub enum SkycellError {
    /// I/O error
    IoError(io::Error),
    /// Transport failure talking to the lookup service
    HttpError(reqwest::Error),
    /// The lookup service answered with a non-OK status
    LookupError {
        url: String,
        ra: f64,
        dec: f64,
        status: u16,
        body: String,
    },
    /// The lookup response table could not be parsed
    ParseError(String),
    /// The lookup service returned no candidate skycells
    NoCandidates { ra: f64, dec: f64 },
    /// Candidate selection reached a state it should never reach
    InternalError(String),
    /// An archive could not be opened or read
    ArchiveError { path: PathBuf, source: io::Error },
    /// Invalid sky coordinate
    InvalidCoordinate(String),
    /// Invalid or malformed configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SkycellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkycellError::IoError(e) => write!(f, "I/O error: {}", e),
            SkycellError::HttpError(e) => write!(f, "HTTP error: {}", e),
            SkycellError::LookupError { url, ra, dec, status, body } => write!(
                f,
                "Could not get the webpage {} setting ra={} and dec={}, status {}, response: {}",
                url, ra, dec, status, body
            ),
            SkycellError::ParseError(msg) => write!(f, "Could not parse skycell table: {}", msg),
            SkycellError::NoCandidates { ra, dec } => {
                write!(f, "No skycell found for ra={} dec={}", ra, dec)
            }
            SkycellError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            SkycellError::ArchiveError { path, source } => {
                write!(f, "Cannot read archive {}: {}", path.display(), source)
            }
            SkycellError::InvalidCoordinate(msg) => write!(f, "Invalid coordinate: {}", msg),
            SkycellError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SkycellError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SkycellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SkycellError::IoError(e) => Some(e),
            SkycellError::HttpError(e) => Some(e),
            SkycellError::ArchiveError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SkycellError {
    fn from(error: io::Error) -> Self {
        SkycellError::IoError(error)
    }
}

impl From<reqwest::Error> for SkycellError {
    fn from(error: reqwest::Error) -> Self {
        SkycellError::HttpError(error)
    }
}

impl From<String> for SkycellError {
    fn from(msg: String) -> Self {
        SkycellError::GenericError(msg)
    }
}

/// Result type for skycell operations
pub type SkycellResult<T> = Result<T, SkycellError>;
