pub mod errors;
pub mod config;
pub mod coordinate;
pub mod skycell;
pub mod archive;
pub mod batch;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{FetchSummary, SkycellKit};

pub use errors::{SkycellError, SkycellResult};
pub use config::Config;
pub use coordinate::SkyPosition;
pub use skycell::{SkycellCandidate, SkycellResolution, SkycellResolver, TileDimensions};
pub use archive::{ArchiveLocator, SelectiveExtractor};
pub use batch::{BatchDispatcher, BatchJob};
