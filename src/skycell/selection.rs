//! Best-skycell selection

use log::debug;

use crate::errors::{SkycellError, SkycellResult};
use super::candidate::{SkycellCandidate, SkycellResolution, TileDimensions};

/// Pick the candidate whose position is farthest from the tile borders
///
/// A single candidate is returned as-is. Otherwise the first candidate with
/// the strictly largest margin wins; later candidates with an equal margin do
/// not replace it. Margins must beat 0.0 to count at all.
///
/// # Arguments
/// * `candidates` - Candidates in lookup response order
/// * `tile` - Tile dimensions used for the margin
/// * `ra`, `dec` - Position, for error reporting
///
/// # Returns
/// The resolution, `NoCandidates` for an empty list, or `InternalError` when
/// several candidates exist and none has a positive margin
pub fn select_best(
    candidates: Vec<SkycellCandidate>,
    tile: &TileDimensions,
    ra: f64,
    dec: f64,
) -> SkycellResult<SkycellResolution> {
    let candidate_count = candidates.len();

    if candidate_count == 0 {
        return Err(SkycellError::NoCandidates { ra, dec });
    }

    let best_index = if candidate_count == 1 {
        0
    } else {
        let mut best_index = None;
        let mut best_margin = 0.0;

        for (i, candidate) in candidates.iter().enumerate() {
            let margin = candidate.margin(tile);
            debug!("Candidate {} margin {}", candidate, margin);
            if margin > best_margin {
                best_index = Some(i);
                best_margin = margin;
            }
        }

        best_index.ok_or_else(|| {
            SkycellError::InternalError(format!(
                "none of {} skycell candidates has a positive margin",
                candidate_count
            ))
        })?
    };

    let best = candidates
        .into_iter()
        .nth(best_index)
        .ok_or_else(|| SkycellError::InternalError(format!("candidate index {} out of range", best_index)))?;

    Ok(SkycellResolution { best, candidate_count })
}
