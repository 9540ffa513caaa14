//! Equatorial sky position

use std::fmt;

use crate::errors::{SkycellError, SkycellResult};

/// A position on the sky in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    /// Right ascension, degrees in [0, 360)
    ra: f64,
    /// Declination, degrees in [-90, 90]
    dec: f64,
}

impl SkyPosition {
    /// Create a position from decimal degrees
    pub fn new(ra: f64, dec: f64) -> SkycellResult<Self> {
        if !ra.is_finite() || !(0.0..360.0).contains(&ra) {
            return Err(SkycellError::InvalidCoordinate(format!(
                "right ascension {} outside [0, 360)",
                ra
            )));
        }
        if !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
            return Err(SkycellError::InvalidCoordinate(format!(
                "declination {} outside [-90, 90]",
                dec
            )));
        }

        Ok(SkyPosition { ra, dec })
    }

    /// Create a position from sexagesimal strings
    ///
    /// Right ascension is read as hours (`HH:MM:SS.s`), declination as
    /// degrees (`±DD:MM:SS.s`). Fields may also be separated by spaces.
    pub fn from_sexagesimal(ra_hours: &str, dec_degrees: &str) -> SkycellResult<Self> {
        let ra = parse_sexagesimal(ra_hours)? * 15.0;
        let dec = parse_sexagesimal(dec_degrees)?;
        Self::new(ra, dec)
    }

    /// Parse a position from a string
    ///
    /// Accepts decimal degrees as `"ra,dec"` or sexagesimal as
    /// `"HH:MM:SS.s ±DD:MM:SS.s"`.
    pub fn parse(input: &str) -> SkycellResult<Self> {
        let input = input.trim();

        if let Some((ra, dec)) = input.split_once(',') {
            let ra = parse_float(ra.trim(), "right ascension")?;
            let dec = parse_float(dec.trim(), "declination")?;
            return Self::new(ra, dec);
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(SkycellError::InvalidCoordinate(format!(
                "expected 'ra,dec' or 'HH:MM:SS ±DD:MM:SS', got '{}'",
                input
            )));
        }

        Self::from_sexagesimal(parts[0], parts[1])
    }

    /// Right ascension in degrees
    pub fn ra(&self) -> f64 {
        self.ra
    }

    /// Declination in degrees
    pub fn dec(&self) -> f64 {
        self.dec
    }
}

impl fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ra={} dec={}", self.ra, self.dec)
    }
}

fn parse_float(value: &str, what: &str) -> SkycellResult<f64> {
    value
        .parse::<f64>()
        .map_err(|_| SkycellError::InvalidCoordinate(format!("invalid {} '{}'", what, value)))
}

/// Convert `[±]A:B:C` into `A + B/60 + C/3600` carrying the leading sign
fn parse_sexagesimal(value: &str) -> SkycellResult<f64> {
    let value = value.trim();
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let fields: Vec<&str> = unsigned.split(':').collect();
    if fields.is_empty() || fields.len() > 3 {
        return Err(SkycellError::InvalidCoordinate(format!("invalid sexagesimal value '{}'", value)));
    }

    let mut total = 0.0;
    let mut scale = 1.0;
    for (i, field) in fields.iter().enumerate() {
        let number = parse_float(field, "sexagesimal field")?;
        if number < 0.0 || (i > 0 && number >= 60.0) {
            return Err(SkycellError::InvalidCoordinate(format!("invalid sexagesimal value '{}'", value)));
        }
        total += number / scale;
        scale *= 60.0;
    }

    Ok(if negative { -total } else { total })
}
