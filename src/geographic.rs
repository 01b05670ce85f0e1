use std::fmt::Display;

use crate::datum::Datum;
use crate::datum_shift;
use crate::dms::DmsPair;
use crate::projections::transverse_mercator::TransverseMercator;
use crate::utm::UtmCoord;
use crate::{Error, ParseCoord};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// An unprojected decimal-degree point. Negative longitude means western
/// hemisphere. Can be converted to/from [`UtmCoord`] and [`DmsPair`].
///
/// The datum of a `GeoPoint` is implicit: it is whatever datum the value
/// was produced on, and [`GeoPoint::nad27_to_nad83`] is the only operation
/// that moves a point between datums.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl GeoPoint {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> GeoPoint {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::GeoPoint;
    ///
    /// let point = GeoPoint::create(36.1699, -115.1398);
    /// assert!(point.is_ok());
    ///
    /// let invalid_lat = GeoPoint::create(100.0, 0.0);
    /// assert!(invalid_lat.is_err());
    ///
    /// let invalid_lon = GeoPoint::create(0.0, -200.0);
    /// assert!(invalid_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<GeoPoint, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!(
                "Latitude {lat} outside of valid range [-90, 90]."
            )))
        } else if !(-180_f64..180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!(
                "Longitude {lon} outside of valid range [-180, 180]."
            )))
        } else {
            Ok(GeoPoint::new(lat, lon))
        }
    }

    /// Returns the latitude value in decimal degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value in decimal degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns the distance in meters between two points using the
    /// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &GeoPoint) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Parses a raw DMS pair into a [`GeoPoint`]. See
    /// [`DmsPair::to_geographic`] for the hemisphere handling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDms`] for strings that don't split into
    /// three numeric components.
    pub fn from_dms(value: &DmsPair) -> Result<GeoPoint, Error> {
        value.to_geographic()
    }

    /// Converts from [`UtmCoord`] to [`GeoPoint`] on the coordinate's own
    /// datum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainError`] if the footpoint latitude reaches the
    /// poles.
    pub fn from_utm(value: &UtmCoord) -> Result<GeoPoint, Error> {
        value.to_geographic()
    }

    /// Projects this point to zone-11 UTM on NAD83.
    ///
    /// The point must be a NAD83 (or WGS84-compatible) western-hemisphere
    /// position near the fixed zone; no zone selection is performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainError`] at the poles, where the projection is
    /// undefined.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::GeoPoint;
    ///
    /// let point = GeoPoint::create(36.1699, -115.1398).unwrap();
    /// let coord = point.to_utm().unwrap();
    ///
    /// assert!((coord.easting() - 667_304.05).abs() < 5.0);
    /// assert!((coord.northing() - 4_004_396.31).abs() < 5.0);
    /// ```
    pub fn to_utm(&self) -> Result<UtmCoord, Error> {
        TransverseMercator::zone11(Datum::Nad83).project(self)
    }

    /// Shifts a point read off a NAD27 source onto NAD83/WGS84 using the
    /// abridged Molodensky transform with the fixed regional shift vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainError`] at the poles.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::GeoPoint;
    ///
    /// let nad27 = GeoPoint::create(36.1699, -115.1398).unwrap();
    /// let nad83 = nad27.nad27_to_nad83().unwrap();
    ///
    /// assert!((nad83.longitude() - -115.140636).abs() < 1e-5);
    /// assert!((nad83.latitude() - 36.169890).abs() < 1e-5);
    /// ```
    pub fn nad27_to_nad83(&self) -> Result<GeoPoint, Error> {
        datum_shift::nad27_to_nad83(self)
    }
}

impl ParseCoord for GeoPoint {
    fn parse_coord(x: &str, y: &str) -> Result<GeoPoint, Error> {
        let lon: f64 = x
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCoord(format!("Longitude '{x}' is not numeric")))?;
        let lat: f64 = y
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCoord(format!("Latitude '{y}' is not numeric")))?;
        GeoPoint::create(lat, lon)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
