//! Skycell resolution
//!
//! This module turns a sky position into the survey skycell that contains it
//! with the widest margin, by querying the lookup service and selecting among
//! the candidates it returns.

mod candidate;
mod selection;
mod table_parser;
mod resolver;
#[cfg(test)]
mod tests;

pub use candidate::{SkycellCandidate, SkycellResolution, TileDimensions};
pub use selection::select_best;
pub use table_parser::{parse_candidates, table_cells};
pub use resolver::SkycellResolver;
