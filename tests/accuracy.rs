use surveyconvert::{Datum, DmsPair, Error, GeoCoord, GeoPoint, TransverseMercator, UtmCoord};

/// Forward/inverse projection agree to a tenth of a millimeter of a degree
/// away from the zone edge.
#[test]
fn projection_round_trip_tight_span() {
    for lat_step in 0..=6 {
        let lat = 25.0 + 5.0 * f64::from(lat_step);
        for lon_step in 0..=6 {
            let lon = -118.5 + 0.5 * f64::from(lon_step);

            let point = GeoPoint::create(lat, lon).unwrap();
            let coord = point.to_utm().unwrap();
            let back = coord.to_geographic().unwrap();

            assert!(
                (back.latitude() - lat).abs() < 1e-6,
                "latitude drifted at ({lat}, {lon}): {}",
                back.latitude()
            );
            assert!(
                (back.longitude() - lon).abs() < 1e-6,
                "longitude drifted at ({lat}, {lon}): {}",
                back.longitude()
            );
        }
    }
}

/// Truncation error grows toward the pole and the zone edge but stays
/// below a hundredth of an arcsecond over the whole usable span.
#[test]
fn projection_round_trip_full_span() {
    for lat_step in 0..=17 {
        let lat = 11.0 + 4.0 * f64::from(lat_step);
        for lon_step in 0..=8 {
            let lon = -119.8 + 0.7 * f64::from(lon_step);

            let point = GeoPoint::create(lat, lon).unwrap();
            let back = point.to_utm().unwrap().to_geographic().unwrap();

            assert!((back.latitude() - lat).abs() < 1e-5);
            assert!((back.longitude() - lon).abs() < 1e-5);
        }
    }
}

#[test]
fn las_vegas_fixed_point() {
    let point = GeoPoint::create(36.1699, -115.1398).unwrap();
    let coord = point.to_utm().unwrap();

    assert_eq!(coord.datum(), Datum::Nad83);
    assert!((coord.easting() - 667_304.05).abs() < 5.0);
    assert!((coord.northing() - 4_004_396.31).abs() < 5.0);

    let back = GeoPoint::from_utm(&coord).unwrap();
    assert!((back.longitude() - -115.1398).abs() < 1e-4);
    assert!((back.latitude() - 36.1699).abs() < 1e-4);
}

#[test]
fn dms_forward_formula() {
    let point = GeoPoint::from_dms(&DmsPair::new("115 08 23", "36 10 11")).unwrap();

    let expected_lat = 36.0 + 10.0 / 60.0 + 11.0 / 3600.0;
    let expected_lon = -(115.0 + 8.0 / 60.0 + 23.0 / 3600.0);
    assert!((point.latitude() - expected_lat).abs() < 1e-12);
    assert!((point.longitude() - expected_lon).abs() < 1e-12);
}

/// The parser folds every longitude west regardless of its written sign;
/// latitude keeps the sign of its degrees.
#[test]
fn dms_hemisphere_asymmetry() {
    let plain = DmsPair::new("115 08 23", "36 10 11").to_geographic().unwrap();
    let signed = DmsPair::new("-115 08 23", "36 10 11").to_geographic().unwrap();

    assert!(plain.longitude() < 0.0);
    assert!((plain.longitude() - signed.longitude()).abs() < 1e-12);

    let south = DmsPair::new("115 08 23", "-36 10 11").to_geographic().unwrap();
    assert!((south.latitude() - (-36.0 + 10.0 / 60.0 + 11.0 / 3600.0)).abs() < 1e-12);
}

#[test]
fn chained_conversion_dms_to_utm() {
    let projected = GeoCoord::parse("DMS", "115 08 23", "36 10 11")
        .unwrap()
        .to_projected()
        .unwrap();

    let (easting, northing) = projected.numeric_xy().unwrap();
    assert!((easting - 667_311.42).abs() < 0.5);
    assert!((northing - 4_004_376.73).abs() < 0.5);
}

#[test]
fn poles_fail_forward_and_inverse() {
    let pole = GeoPoint::create(90.0, -117.0).unwrap();
    assert!(matches!(pole.to_utm(), Err(Error::DomainError(_))));

    let proj = TransverseMercator::zone11(Datum::Nad83);
    assert!(matches!(
        proj.invert(500_000.0, 10_000_000.0),
        Err(Error::DomainError(_))
    ));
}

#[test]
fn parse_pair_entry_point() {
    let point: GeoPoint = surveyconvert::parse_pair("-115.1398", "36.1699").unwrap();
    assert!((point.longitude() - -115.1398).abs() < 1e-12);

    let pair: DmsPair = surveyconvert::parse_pair("115 08 23", "36 10 11").unwrap();
    assert_eq!(pair.x(), "115 08 23");

    let err = surveyconvert::parse_pair::<&str, GeoPoint>("not a number", "36.1699");
    assert!(matches!(err, Err(Error::InvalidCoord(_))));
}

#[test]
fn unsupported_datum() {
    assert!(matches!(
        "WGS84".parse::<Datum>(),
        Err(Error::UnknownDatum(_))
    ));
    assert!(matches!(
        GeoCoord::parse("WGS84", "667304", "4004396"),
        Err(Error::UnknownDatum(_))
    ));
}

/// The same easting/northing pair on NAD27 constants lands a measurably
/// different place than on NAD83.
#[test]
fn datum_constants_change_the_inverse() {
    let nad83 = UtmCoord::create(Datum::Nad83, 667_304.047, 4_004_396.315)
        .unwrap()
        .to_geographic()
        .unwrap();
    let nad27 = UtmCoord::create(Datum::Nad27, 667_304.047, 4_004_396.315)
        .unwrap()
        .to_geographic()
        .unwrap();

    let separation = nad83.haversine(&nad27);
    assert!(separation > 50.0, "separation was only {separation} m");
}

#[test]
fn nad27_to_nad83_fixed_point() {
    let nad27 = GeoPoint::create(36.1699, -115.1398).unwrap();
    let nad83 = nad27.nad27_to_nad83().unwrap();

    assert!((nad83.longitude() - -115.140_635_98).abs() < 1e-6);
    assert!((nad83.latitude() - 36.169_889_67).abs() < 1e-6);
}

/// Full legacy path for a NAD27 survey record: invert the projection on
/// NAD27 constants, then shift the datum.
#[test]
fn nad27_utm_to_nad83_geographic() {
    let coord = UtmCoord::create(Datum::Nad27, 667_304.047, 4_004_396.315).unwrap();
    let shifted = coord.to_geographic().unwrap().nad27_to_nad83().unwrap();

    // Stays in the same neighborhood but moves off the NAD27 position
    let unshifted = coord.to_geographic().unwrap();
    let moved = unshifted.haversine(&shifted);
    assert!(moved > 10.0 && moved < 250.0);
}
