// Squared eccentricity / semi-major axis per supported datum
pub(crate) const NAD83_E: f64 = 0.00669438;
pub(crate) const NAD83_R: f64 = 6_378_137.;
#[allow(clippy::unreadable_literal)]
pub(crate) const NAD27_E: f64 = 0.006768658;
pub(crate) const NAD27_R: f64 = 6_378_206.4;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
// Standard UTM false easting
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
// False northing for the southern aspect
pub(crate) const UTM_SOUTH_FALSE_NORTHING: f64 = 10_000_000.;

// Central meridian of UTM zone 11, the zone the source survey data lives in
pub(crate) const ZONE11_CENTRAL_MERIDIAN: f64 = -117.;

// Standard UTM validity band for a single zone
pub(crate) const MIN_EASTING: f64 = 100_000.;
pub(crate) const MAX_EASTING: f64 = 900_000.;
pub(crate) const MIN_NORTHING: f64 = 0.;
pub(crate) const MAX_NORTHING: f64 = 10_000_000.;

// Clarke 1866, the NAD27 reference ellipsoid
pub(crate) const CLARKE1866_A: f64 = 6_378_206.4;
#[allow(clippy::unreadable_literal)]
pub(crate) const CLARKE1866_F: f64 = 1.0 / 294.9786982;

// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// NAD27 -> NAD83 origin shift in meters, derived for the Nevada survey region
pub(crate) const NAD27_NAD83_DX: f64 = -8.;
pub(crate) const NAD27_NAD83_DY: f64 = 160.;
pub(crate) const NAD27_NAD83_DZ: f64 = 176.;
