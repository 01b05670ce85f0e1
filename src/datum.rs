use std::fmt::Display;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::constants::{NAD27_E, NAD27_R, NAD83_E, NAD83_R, UTM_K0};
use crate::Error;

/// Geodetic datum of a projected survey coordinate.
///
/// The survey data this crate serves carries points on either NAD83 or
/// NAD27; anything else is rejected at the parse boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Datum {
    Nad83,
    Nad27,
}

impl Datum {
    /// Returns the derived projection constants for this datum.
    ///
    /// Constants are computed once per datum and shared; they are read-only
    /// and safe to use from any number of threads.
    pub fn constants(self) -> &'static DatumConstants {
        match self {
            Datum::Nad83 => &NAD83_CONSTANTS,
            Datum::Nad27 => &NAD27_CONSTANTS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Datum::Nad83 => "NAD83",
            Datum::Nad27 => "NAD27",
        }
    }
}

impl FromStr for Datum {
    type Err = Error;

    /// Parses a datum tag as it appears in survey records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDatum`] for anything other than `NAD83` or
    /// `NAD27`.
    ///
    /// # Usage
    ///
    /// ```
    /// use surveyconvert::Datum;
    ///
    /// assert_eq!("NAD83".parse::<Datum>().unwrap(), Datum::Nad83);
    /// assert!("WGS84".parse::<Datum>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Datum, Error> {
        match value {
            "NAD83" => Ok(Datum::Nad83),
            "NAD27" => Ok(Datum::Nad27),
            other => Err(Error::UnknownDatum(other.to_string())),
        }
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived transverse Mercator coefficients for one reference ellipsoid.
///
/// Every field is a pure function of the datum's squared eccentricity `e`
/// and semi-major axis `r`; the struct is never mutated after derivation.
#[derive(Clone, Copy, Debug)]
pub struct DatumConstants {
    /// UTM central scale factor, 0.9996 for every datum.
    pub k0: f64,
    /// Squared eccentricity of the ellipsoid.
    pub e: f64,
    pub e2: f64,
    pub e3: f64,
    /// Second eccentricity squared, `e / (1 - e)`.
    pub ep2: f64,
    pub sqrt_e: f64,
    /// Auxiliary eccentricity `(1 - sqrt(1 - e)) / (1 + sqrt(1 - e))` used by
    /// the footpoint latitude series.
    pub e1: f64,
    pub e1_2: f64,
    pub e1_3: f64,
    pub e1_4: f64,
    pub e1_5: f64,
    /// Meridian arc length coefficients, 4th-order truncation.
    pub m1: f64,
    pub m2: f64,
    pub m3: f64,
    pub m4: f64,
    /// Footpoint latitude coefficients, 5th-order truncation.
    pub p2: f64,
    pub p3: f64,
    pub p4: f64,
    pub p5: f64,
    /// Semi-major axis in meters.
    pub r: f64,
}

impl DatumConstants {
    fn derive(e: f64, r: f64) -> DatumConstants {
        let e2 = e * e;
        let e3 = e2 * e;
        let ep2 = e / (1.0 - e);

        let sqrt_e = (1.0 - e).sqrt();
        let e1 = (1.0 - sqrt_e) / (1.0 + sqrt_e);
        let e1_2 = e1 * e1;
        let e1_3 = e1_2 * e1;
        let e1_4 = e1_3 * e1;
        let e1_5 = e1_4 * e1;

        let m1 = 1.0 - e / 4.0 - 3.0 * e2 / 64.0 - 5.0 * e3 / 256.0;
        let m2 = 3.0 * e / 8.0 + 3.0 * e2 / 32.0 + 45.0 * e3 / 1024.0;
        let m3 = 15.0 * e2 / 256.0 + 45.0 * e3 / 1024.0;
        let m4 = 35.0 * e3 / 3072.0;

        let p2 = 3.0 / 2.0 * e1 - 27.0 / 32.0 * e1_3 + 269.0 / 512.0 * e1_5;
        let p3 = 21.0 / 16.0 * e1_2 - 55.0 / 32.0 * e1_4;
        let p4 = 151.0 / 96.0 * e1_3 - 417.0 / 128.0 * e1_5;
        let p5 = 1097.0 / 512.0 * e1_4;

        DatumConstants {
            k0: UTM_K0,
            e,
            e2,
            e3,
            ep2,
            sqrt_e,
            e1,
            e1_2,
            e1_3,
            e1_4,
            e1_5,
            m1,
            m2,
            m3,
            m4,
            p2,
            p3,
            p4,
            p5,
            r,
        }
    }
}

lazy_static! {
    static ref NAD83_CONSTANTS: DatumConstants = DatumConstants::derive(NAD83_E, NAD83_R);
    static ref NAD27_CONSTANTS: DatumConstants = DatumConstants::derive(NAD27_E, NAD27_R);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nad83_derivation() {
        let c = Datum::Nad83.constants();
        assert!((c.m1 - 0.998_324_298_450_324_3).abs() < 1e-15);
        assert!((c.m2 - 0.002_514_607_064_228_144).abs() < 1e-15);
        assert!((c.ep2 - 0.006_739_496_752_268_451).abs() < 1e-15);
        assert!((c.e1 - 0.001_679_220_388_864_974_4).abs() < 1e-15);
        assert!((c.p2 - 0.002_518_826_588_119_59).abs() < 1e-15);
        assert!((c.p5 - 1.703_599_333_928_802_6e-11).abs() < 1e-20);
        assert!((c.r - 6_378_137.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nad27_derivation() {
        let c = Datum::Nad27.constants();
        assert!((c.m1 - 0.998_305_681_877_755_1).abs() < 1e-15);
        assert!((c.p2 - 0.002_546_869_395_380_467_7).abs() < 1e-15);
        assert!((c.r - 6_378_206.4).abs() < f64::EPSILON);
        assert!((c.k0 - 0.9996).abs() < f64::EPSILON);
    }

    #[test]
    fn unsupported_datum_is_rejected() {
        let err = "WGS84".parse::<Datum>().unwrap_err();
        assert!(matches!(err, Error::UnknownDatum(name) if name == "WGS84"));
    }
}
