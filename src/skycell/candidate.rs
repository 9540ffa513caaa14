//! Skycell candidates returned by the lookup service

use std::fmt;

/// Pixel dimensions of a skycell tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDimensions {
    pub width: f64,
    pub height: f64,
}

impl TileDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        TileDimensions { width, height }
    }
}

/// One row of the lookup table: a skycell and the position's pixel coordinates in it
#[derive(Debug, Clone, PartialEq)]
pub struct SkycellCandidate {
    /// Skycell name with the survey prefix removed, e.g. `2381.064`
    pub name: String,
    /// X pixel coordinate of the position within the tile
    pub x: f64,
    /// Y pixel coordinate of the position within the tile
    pub y: f64,
}

impl SkycellCandidate {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        SkycellCandidate { name: name.into(), x, y }
    }

    /// Distance from the pixel position to the nearest tile edge
    ///
    /// Negative when the position lies outside the tile.
    pub fn margin(&self, tile: &TileDimensions) -> f64 {
        (tile.width - self.x)
            .min(self.x)
            .min(tile.height - self.y)
            .min(self.y)
    }
}

impl fmt::Display for SkycellCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x={}, y={})", self.name, self.x, self.y)
    }
}

/// The chosen skycell for a position
#[derive(Debug, Clone, PartialEq)]
pub struct SkycellResolution {
    /// Candidate farthest from any tile edge
    pub best: SkycellCandidate,
    /// Number of candidates the lookup service returned
    pub candidate_count: usize,
}

impl SkycellResolution {
    /// Name of the chosen skycell
    pub fn skycell(&self) -> &str {
        &self.best.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_outside_tile_is_negative() {
        let tile = TileDimensions::new(100.0, 50.0);
        assert_eq!(SkycellCandidate::new("a", -3.0, 25.0).margin(&tile), -3.0);
        assert_eq!(SkycellCandidate::new("a", 50.0, 60.0).margin(&tile), -10.0);
    }
}
