//! Sky coordinate handling
//!
//! This module provides the equatorial position type fed to the skycell
//! resolver, with parsers for decimal and sexagesimal input.

mod sky_position;

pub use self::sky_position::SkyPosition;
