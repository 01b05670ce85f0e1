//! Parallel conversion over collections of coordinates.
//!
//! Every transform in this crate is a pure function over immutable inputs,
//! so batch conversion is a parallel map with the single point as the unit
//! of work. No ordering is guaranteed between points; each point either
//! converts or carries its own error in the output slot.

use rayon::prelude::*;

use crate::coord::GeoCoord;
use crate::Error;

/// Applies one conversion to every coordinate in parallel, preserving
/// input order in the output.
pub fn convert_all<F>(coords: &[GeoCoord], convert: F) -> Vec<Result<GeoCoord, Error>>
where
    F: Fn(&GeoCoord) -> Result<GeoCoord, Error> + Sync + Send,
{
    coords.par_iter().map(convert).collect()
}

/// Converts every coordinate toward decimal degrees in parallel.
pub fn to_geographic_all(coords: &[GeoCoord]) -> Vec<Result<GeoCoord, Error>> {
    convert_all(coords, GeoCoord::to_geographic)
}

/// Converts every coordinate toward zone-11 NAD83 UTM in parallel.
pub fn to_projected_all(coords: &[GeoCoord]) -> Vec<Result<GeoCoord, Error>> {
    convert_all(coords, GeoCoord::to_projected)
}
