use std::f64::consts::FRAC_PI_2;

use crate::constants::{UTM_FALSE_EASTING, UTM_SOUTH_FALSE_NORTHING, ZONE11_CENTRAL_MERIDIAN};
use crate::datum::Datum;
use crate::geographic::GeoPoint;
use crate::utm::UtmCoord;
use crate::Error;

/// Transverse Mercator projection for one datum and one fixed central
/// meridian, using the classic truncated series for the meridian arc
/// (4th order) and footpoint latitude (5th order).
///
/// [`TransverseMercator::zone11`] reproduces the legacy behavior of the
/// survey system this crate serves: UTM zone 11 (central meridian −117°),
/// standard 500 km false easting, northern aspect. The central meridian and
/// false offsets are explicit fields so other zones can be expressed, but
/// no zone-selection policy exists here; callers pick their parameters.
#[derive(Clone, Copy, Debug)]
pub struct TransverseMercator {
    datum: Datum,
    central_meridian: f64,
    false_easting: f64,
    false_northing: f64,
}

impl TransverseMercator {
    /// The fixed zone-11 projection the source survey data lives in.
    pub fn zone11(datum: Datum) -> TransverseMercator {
        TransverseMercator::new(datum, ZONE11_CENTRAL_MERIDIAN)
    }

    /// A projection around an arbitrary central meridian (degrees), with
    /// the standard UTM false easting and the northern aspect.
    pub fn new(datum: Datum, central_meridian: f64) -> TransverseMercator {
        Self {
            datum,
            central_meridian,
            false_easting: UTM_FALSE_EASTING,
            false_northing: 0.0,
        }
    }

    /// Switches to the southern aspect (false northing 10 000 km).
    pub fn south(mut self) -> TransverseMercator {
        self.false_northing = UTM_SOUTH_FALSE_NORTHING;
        self
    }

    pub fn datum(&self) -> Datum {
        self.datum
    }

    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    /// Forward projection: decimal degrees to easting/northing in meters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainError`] for a latitude at or beyond ±90°,
    /// where the series is undefined.
    pub fn project(&self, point: &GeoPoint) -> Result<UtmCoord, Error> {
        if point.latitude.abs() >= 90.0 {
            return Err(Error::DomainError(format!(
                "Latitude {} is at or beyond the poles",
                point.latitude
            )));
        }

        let ell = self.datum.constants();

        let lat_rad = point.latitude.to_radians();
        let lat_sin = lat_rad.sin();
        let lat_cos = lat_rad.cos();
        let lat_tan = lat_sin / lat_cos;
        let lat_tan2 = lat_tan * lat_tan;
        let lat_tan4 = lat_tan2 * lat_tan2;

        let lon_rad = point.longitude.to_radians();
        let central_rad = self.central_meridian.to_radians();

        // Radius of curvature in the prime vertical
        let n = ell.r / (1.0 - ell.e * lat_sin * lat_sin).sqrt();
        let c = ell.ep2 * lat_cos * lat_cos;

        let a = lat_cos * (lon_rad - central_rad);
        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        // Meridian arc length from the equator
        let m = ell.r
            * (ell.m1 * lat_rad - ell.m2 * (2.0 * lat_rad).sin()
                + ell.m3 * (4.0 * lat_rad).sin()
                - ell.m4 * (6.0 * lat_rad).sin());

        let easting = ell.k0
            * n
            * (a + a3 / 6.0 * (1.0 - lat_tan2 + c)
                + a5 / 120.0 * (5.0 - 18.0 * lat_tan2 + lat_tan4 + 72.0 * c - 58.0 * ell.ep2))
            + self.false_easting;

        let northing = ell.k0
            * (m + n
                * lat_tan
                * (a2 / 2.0
                    + a4 / 24.0 * (5.0 - lat_tan2 + 9.0 * c + 4.0 * c * c)
                    + a6 / 720.0
                        * (61.0 - 58.0 * lat_tan2 + lat_tan4 + 600.0 * c - 330.0 * ell.ep2)))
            + self.false_northing;

        Ok(UtmCoord::new(self.datum, easting, northing))
    }

    /// Inverse projection via the footpoint latitude: easting/northing in
    /// meters to decimal degrees on this projection's datum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainError`] if the footpoint latitude lands at or
    /// beyond ±90°.
    pub fn invert(&self, easting: f64, northing: f64) -> Result<GeoPoint, Error> {
        let ell = self.datum.constants();

        let x = easting - self.false_easting;
        let y = northing - self.false_northing;

        let m = y / ell.k0;
        let mu = m / (ell.r * ell.m1);

        let p_rad = mu
            + ell.p2 * (2.0 * mu).sin()
            + ell.p3 * (4.0 * mu).sin()
            + ell.p4 * (6.0 * mu).sin()
            + ell.p5 * (8.0 * mu).sin();

        if p_rad.abs() >= FRAC_PI_2 {
            return Err(Error::DomainError(format!(
                "Footpoint latitude of northing {northing} is at or beyond the poles"
            )));
        }

        let p_sin = p_rad.sin();
        let p_sin2 = p_sin * p_sin;
        let p_cos = p_rad.cos();
        let p_tan = p_sin / p_cos;
        let p_tan2 = p_tan * p_tan;
        let p_tan4 = p_tan2 * p_tan2;

        let ep_sin = 1.0 - ell.e * p_sin2;
        let ep_sin_sqrt = ep_sin.sqrt();

        let n = ell.r / ep_sin_sqrt;
        let r = (1.0 - ell.e) / ep_sin;
        let c = ell.e1 * p_cos * p_cos;
        let c2 = c * c;

        let d = x / (n * ell.k0);
        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let latitude = p_rad
            - (p_tan / r)
                * (d2 / 2.0
                    - d4 / 24.0 * (5.0 + 3.0 * p_tan2 + 10.0 * c - 4.0 * c2 - 9.0 * ell.ep2))
            + d6 / 720.0
                * (61.0 + 90.0 * p_tan2 + 298.0 * c + 45.0 * p_tan4 - 252.0 * ell.ep2 - 3.0 * c2);

        let longitude = (d - d3 / 6.0 * (1.0 + 2.0 * p_tan2 + c)
            + d5 / 120.0 * (5.0 - 2.0 * c + 28.0 * p_tan2 - 3.0 * c2 + 8.0 * ell.ep2 + 24.0 * p_tan4))
            / p_cos;

        Ok(GeoPoint::new(
            latitude.to_degrees(),
            longitude.to_degrees() + self.central_meridian,
        ))
    }
}
