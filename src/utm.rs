use std::fmt::Display;

use crate::constants::{MAX_EASTING, MAX_NORTHING, MIN_EASTING, MIN_NORTHING};
use crate::datum::Datum;
use crate::geographic::GeoPoint;
use crate::projections::transverse_mercator::TransverseMercator;
use crate::Error;

/// A projected zone-11 UTM coordinate tagged with its datum: easting and
/// northing in meters, false easting included.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmCoord {
    pub(crate) datum: Datum,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl UtmCoord {
    pub(crate) fn new(datum: Datum, easting: f64, northing: f64) -> UtmCoord {
        Self {
            datum,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM coordinate, checking easting and northing
    /// against the standard single-zone validity band:
    /// * Easting must be in range [100km, 900km]
    /// * Northing must be in range [0km, 10000km]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either value is outside its band.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::{Datum, UtmCoord};
    ///
    /// let coord = UtmCoord::create(Datum::Nad83, 667_304.0, 4_004_396.0);
    /// assert!(coord.is_ok());
    ///
    /// let bad = UtmCoord::create(Datum::Nad83, 42.0, 4_004_396.0);
    /// assert!(bad.is_err());
    /// ```
    pub fn create(datum: Datum, easting: f64, northing: f64) -> Result<UtmCoord, Error> {
        if !(MIN_EASTING..=MAX_EASTING).contains(&easting) {
            return Err(Error::InvalidCoord(format!(
                "Easting {:.2}km not in UTM range [{:.2}km, {:.2}km]",
                easting / 1000.0,
                MIN_EASTING / 1000.0,
                MAX_EASTING / 1000.0,
            )));
        }

        if !(MIN_NORTHING..=MAX_NORTHING).contains(&northing) {
            return Err(Error::InvalidCoord(format!(
                "Northing {:.2}km not in UTM range [{:.2}km, {:.2}km]",
                northing / 1000.0,
                MIN_NORTHING / 1000.0,
                MAX_NORTHING / 1000.0,
            )));
        }

        Ok(UtmCoord::new(datum, easting, northing))
    }

    /// Returns the datum this coordinate is projected on.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Returns the easting in meters.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the northing in meters.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Projects a NAD83 decimal-degree point into this representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainError`] at the poles.
    pub fn from_geographic(value: &GeoPoint) -> Result<UtmCoord, Error> {
        value.to_utm()
    }

    /// Converts back to decimal degrees on this coordinate's own datum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainError`] if the footpoint latitude reaches the
    /// poles.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::{Datum, UtmCoord};
    ///
    /// let coord = UtmCoord::create(Datum::Nad83, 667_304.047, 4_004_396.315).unwrap();
    /// let point = coord.to_geographic().unwrap();
    ///
    /// assert!((point.longitude() - -115.1398).abs() < 1e-4);
    /// assert!((point.latitude() - 36.1699).abs() < 1e-4);
    /// ```
    pub fn to_geographic(&self) -> Result<GeoPoint, Error> {
        TransverseMercator::zone11(self.datum).invert(self.easting, self.northing)
    }
}

impl Display for UtmCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(f, "{} {easting} {northing}", self.datum)
    }
}
