use std::fmt::Display;

use crate::datum::Datum;
use crate::dms::DmsPair;
use crate::geographic::GeoPoint;
use crate::utm::UtmCoord;
use crate::{Error, ParseCoord};

/// One survey point in whatever representation the record carried:
/// a raw DMS string pair, a decimal-degree point, or a projected UTM
/// coordinate tagged NAD83 or NAD27.
///
/// Values are immutable; every transform returns a new `GeoCoord`, and
/// transforms compose by chaining (DMS parses to decimal degrees, decimal
/// degrees project to UTM).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeoCoord {
    Dms(DmsPair),
    Geographic(GeoPoint),
    Projected(UtmCoord),
}

impl GeoCoord {
    /// Builds a coordinate from the tag and raw string pair of a survey
    /// record.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownDatum`] for a tag outside `{DMS, DD, NAD83, NAD27}`.
    /// * [`Error::MalformedDms`] for a DMS pair that doesn't split into
    ///   three numeric components.
    /// * [`Error::InvalidCoord`] for non-numeric or out-of-range values.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::GeoCoord;
    ///
    /// let dd = GeoCoord::parse("DD", "-115.1398", "36.1699").unwrap();
    /// assert_eq!(dd.format_tag(), "DD");
    ///
    /// let utm = GeoCoord::parse("NAD27", "667304.0", "4004396.0").unwrap();
    /// assert_eq!(utm.format_tag(), "NAD27");
    ///
    /// assert!(GeoCoord::parse("WGS84", "0", "0").is_err());
    /// ```
    pub fn parse(tag: &str, x: &str, y: &str) -> Result<GeoCoord, Error> {
        match tag {
            "DMS" => Ok(GeoCoord::Dms(DmsPair::parse_coord(x, y)?)),
            "DD" => Ok(GeoCoord::Geographic(GeoPoint::parse_coord(x, y)?)),
            "NAD83" | "NAD27" => {
                let datum: Datum = tag.parse()?;
                let easting: f64 = x.trim().parse().map_err(|_| {
                    Error::InvalidCoord(format!("Easting '{x}' is not numeric"))
                })?;
                let northing: f64 = y.trim().parse().map_err(|_| {
                    Error::InvalidCoord(format!("Northing '{y}' is not numeric"))
                })?;
                Ok(GeoCoord::Projected(UtmCoord::create(
                    datum, easting, northing,
                )?))
            }
            other => Err(Error::UnknownDatum(other.to_string())),
        }
    }

    /// The record-level tag of this representation.
    pub fn format_tag(&self) -> &'static str {
        match self {
            GeoCoord::Dms(_) => "DMS",
            GeoCoord::Geographic(_) => "DD",
            GeoCoord::Projected(coord) => coord.datum().as_str(),
        }
    }

    /// Converts toward decimal degrees: DMS pairs are parsed, projected
    /// coordinates are inverted on their own datum, decimal degrees pass
    /// through unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the underlying transform.
    pub fn to_geographic(&self) -> Result<GeoCoord, Error> {
        match self {
            GeoCoord::Dms(pair) => Ok(GeoCoord::Geographic(pair.to_geographic()?)),
            GeoCoord::Geographic(point) => Ok(GeoCoord::Geographic(*point)),
            GeoCoord::Projected(coord) => Ok(GeoCoord::Geographic(coord.to_geographic()?)),
        }
    }

    /// Converts toward zone-11 NAD83 UTM: decimal degrees project
    /// directly, DMS pairs parse and then project, projected coordinates
    /// pass through unchanged.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the underlying transforms.
    pub fn to_projected(&self) -> Result<GeoCoord, Error> {
        match self {
            GeoCoord::Dms(pair) => Ok(GeoCoord::Projected(pair.to_geographic()?.to_utm()?)),
            GeoCoord::Geographic(point) => Ok(GeoCoord::Projected(point.to_utm()?)),
            GeoCoord::Projected(coord) => Ok(GeoCoord::Projected(*coord)),
        }
    }

    /// The numeric x/y pair of a converted coordinate: (longitude,
    /// latitude) for decimal degrees, (easting, northing) for projected
    /// values. A raw DMS pair has no numeric representation yet.
    pub fn numeric_xy(&self) -> Option<(f64, f64)> {
        match self {
            GeoCoord::Dms(_) => None,
            GeoCoord::Geographic(point) => Some((point.longitude(), point.latitude())),
            GeoCoord::Projected(coord) => Some((coord.easting(), coord.northing())),
        }
    }
}

impl Display for GeoCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoCoord::Dms(pair) => write!(f, "DMS {pair}"),
            GeoCoord::Geographic(point) => write!(f, "DD {point}"),
            GeoCoord::Projected(coord) => write!(f, "{coord}"),
        }
    }
}
