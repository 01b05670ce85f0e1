use std::fmt::Display;

use crate::geographic::GeoPoint;
use crate::{Error, ParseCoord};

/// Converts a degrees/minutes/seconds triple into decimal degrees.
///
/// Only the sign of `degrees` carries through; minutes and seconds are
/// always added, never subtracted. Callers needing a southern or western
/// hemisphere value apply the sign correction themselves, the way
/// [`DmsPair::to_geographic`] does for longitude.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// A raw sexagesimal coordinate pair as it appears in survey records:
/// whitespace-separated `"ddd mm ss"` strings, `x` for longitude and `y`
/// for latitude.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DmsPair {
    pub(crate) x: String,
    pub(crate) y: String,
}

impl DmsPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> DmsPair {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Returns the raw longitude string.
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Returns the raw latitude string.
    pub fn y(&self) -> &str {
        &self.y
    }

    /// Parses both components into a decimal-degree point.
    ///
    /// The longitude is converted from its magnitude and then negated: the
    /// survey data this crate serves is all western hemisphere and the
    /// records do not carry a reliable sign. The latitude keeps whatever
    /// sign it was written with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDms`] if either component does not split
    /// into exactly three numeric fields.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::DmsPair;
    ///
    /// let point = DmsPair::new("115 08 23", "36 10 11").to_geographic().unwrap();
    ///
    /// assert!((point.longitude() - -115.13972222).abs() < 1e-8);
    /// assert!((point.latitude() - 36.16972222).abs() < 1e-8);
    /// ```
    pub fn to_geographic(&self) -> Result<GeoPoint, Error> {
        let (x_deg, x_min, x_sec) = split_components(&self.x)?;
        let (y_deg, y_min, y_sec) = split_components(&self.y)?;

        // TODO: take a hemisphere flag so an eastern-hemisphere longitude
        // survives instead of being folded west here
        let longitude = -dms_to_decimal(x_deg.abs(), x_min, x_sec);
        let latitude = dms_to_decimal(y_deg, y_min, y_sec);

        Ok(GeoPoint::new(latitude, longitude))
    }
}

impl ParseCoord for DmsPair {
    fn parse_coord(x: &str, y: &str) -> Result<DmsPair, Error> {
        // Validate eagerly so a malformed record fails at the parse boundary
        split_components(x)?;
        split_components(y)?;
        Ok(DmsPair::new(x, y))
    }
}

impl Display for DmsPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

fn split_components(value: &str) -> Result<(f64, f64, f64), Error> {
    let parts: Vec<&str> = value.split_whitespace().collect();

    if parts.len() != 3 {
        return Err(Error::MalformedDms(format!(
            "'{value}' must have exactly three components, got {}",
            parts.len()
        )));
    }

    let mut fields = [0_f64; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        *field = part.parse().map_err(|_| {
            Error::MalformedDms(format!("component '{part}' of '{value}' is not numeric"))
        })?;
    }

    Ok((fields[0], fields[1], fields[2]))
}
