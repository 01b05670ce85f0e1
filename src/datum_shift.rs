//! The abridged Molodensky transformation from NAD27 to NAD83/WGS84,
//! with the origin shift fixed to the constants derived for the survey
//! region. Not a general-purpose datum transform: the approximation only
//! holds near the region those constants were fitted for.

use crate::constants::{
    CLARKE1866_A, CLARKE1866_F, NAD27_NAD83_DX, NAD27_NAD83_DY, NAD27_NAD83_DZ, WGS84_A, WGS84_F,
};
use crate::geographic::GeoPoint;
use crate::Error;

/// Shifts a decimal-degree point read off a NAD27 source onto NAD83.
///
/// Computes the meridional and prime-vertical radii of curvature on the
/// Clarke 1866 ellipsoid at the input latitude, rotates the fixed shift
/// vector into local angular corrections, adds the ellipsoid-shape term,
/// and applies the corrections in radians.
///
/// # Errors
///
/// Returns [`Error::DomainError`] at the poles, where the longitude
/// correction's denominator vanishes.
pub fn nad27_to_nad83(point: &GeoPoint) -> Result<GeoPoint, Error> {
    if point.latitude().abs() >= 90.0 {
        return Err(Error::DomainError(format!(
            "Latitude {} leaves the longitude shift undefined",
            point.latitude()
        )));
    }

    let lam = point.longitude().to_radians();
    let phi = point.latitude().to_radians();

    let a = CLARKE1866_A;
    let f = CLARKE1866_F;
    let da = WGS84_A - a;
    let df = WGS84_F - f;

    let (slam, clam) = lam.sin_cos();
    let (sphi, cphi) = phi.sin_cos();

    let es = f * (2.0 - f);
    let ep_sin = 1.0 - es * sphi * sphi;

    // Radii of curvature on the source ellipsoid
    let rho = a * (1.0 - es) / ep_sin.powf(1.5);
    let nu = a / ep_sin.sqrt();

    // Offsets in the ellipsoidal space
    let fac = NAD27_NAD83_DX * clam + NAD27_NAD83_DY * slam;
    let adffda = a * df + f * da;

    let dphi = (-fac * sphi + NAD27_NAD83_DZ * cphi + adffda * (2.0 * phi).sin()) / rho;

    let dlam = (NAD27_NAD83_DY * clam - NAD27_NAD83_DX * slam) / (nu * cphi);

    Ok(GeoPoint::new(
        (phi + dphi).to_degrees(),
        (lam + dlam).to_degrees(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nevada_shift() {
        let shifted = nad27_to_nad83(&GeoPoint::new(36.1699, -115.1398)).unwrap();

        assert!((shifted.longitude() - -115.140_635_978_9).abs() < 1e-9);
        assert!((shifted.latitude() - 36.169_889_668_0).abs() < 1e-9);
    }

    #[test]
    fn shift_magnitude_is_regional() {
        // The fixed vector moves a Nevada point well under a quarter
        // kilometer
        let original = GeoPoint::new(39.5296, -119.8138);
        let shifted = nad27_to_nad83(&original).unwrap();

        let moved = original.haversine(&shifted);
        assert!(moved > 10.0 && moved < 250.0);
    }

    #[test]
    fn pole_is_out_of_domain() {
        assert!(matches!(
            nad27_to_nad83(&GeoPoint::new(90.0, -115.0)),
            Err(Error::DomainError(_))
        ));
    }
}
