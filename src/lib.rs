#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod batch;
pub mod coord;
pub mod datum;
pub mod datum_shift;
pub mod dms;
pub mod geographic;
pub mod record;
pub mod region;
pub mod species;
pub mod utm;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod io;

pub use coord::GeoCoord;
pub use datum::{Datum, DatumConstants};
pub use dms::DmsPair;
pub use geographic::GeoPoint;
pub use projections::transverse_mercator::TransverseMercator;
pub use utm::UtmCoord;

pub mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Datum {0} not supported, expected one of NAD83, NAD27")]
    UnknownDatum(String),
    #[error("DMS string is invalid: {0}")]
    MalformedDms(String),
    #[error("Coordinate outside projection domain: {0}")]
    DomainError(String),
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[cfg(feature = "cli")]
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "cli")]
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
    #[cfg(feature = "cli")]
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Construction of a coordinate value from the raw string pair carried by a
/// survey record.
pub trait ParseCoord {
    fn parse_coord(x: &str, y: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn parse_pair<S, T>(x: S, y: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(x.as_ref(), y.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
