//! Footprint string reformatting
//!
//! KML stores a footprint as `lon,lat lon,lat ...`; the gallery shows it as
//! `lon, lat; lon, lat; ` with a trailing separator after every corner.

use std::fmt;

/// A footprint that stopped parsing part-way through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCoordinates {
    /// The pair that did not split into exactly two values
    pub pair: String,
    /// 0-based position of that pair
    pub index: usize,
    /// Output accumulated before the bad pair
    pub partial: String,
}

impl fmt::Display for MalformedCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate pair {} ('{}') is not a lon,lat pair",
            self.index, self.pair
        )
    }
}

impl std::error::Error for MalformedCoordinates {}

/// Reformat a footprint, failing on the first malformed pair
pub fn try_reformat_coordinates(raw: &str) -> Result<String, MalformedCoordinates> {
    let mut formatted = String::new();

    for (index, pair) in raw.split_whitespace().enumerate() {
        let mut parts = pair.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lon), Some(lat), None) => {
                formatted.push_str(lon);
                formatted.push_str(", ");
                formatted.push_str(lat);
                formatted.push_str("; ");
            }
            _ => {
                return Err(MalformedCoordinates {
                    pair: pair.to_string(),
                    index,
                    partial: formatted,
                });
            }
        }
    }

    Ok(formatted)
}

/// Best-effort reformat: a malformed pair is logged and the pairs before
/// it are returned.
pub fn reformat_coordinates(raw: &str) -> String {
    match try_reformat_coordinates(raw) {
        Ok(formatted) => formatted,
        Err(e) => {
            log::warn!("Malformed footprint, keeping '{}': {}", e.partial, e);
            e.partial
        }
    }
}
