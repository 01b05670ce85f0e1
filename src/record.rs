use std::str::FromStr;

use log::warn;
use rayon::prelude::*;

use crate::coord::GeoCoord;
use crate::region::RegionSet;
use crate::species::SpeciesTable;
use crate::{Error, ThisOrThat};

/// Placeholder coordinate written for records that cannot convert.
pub const UNCONVERTIBLE: f64 = -999.0;

/// Datum tags used by field crews for records without a usable location.
const NO_LOCATION_TAGS: [&str; 2] = ["desc", "n/a"];

/// Which representation a batch of records is converted toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ConversionTarget {
    /// Decimal-degree geographic coordinates.
    Geo,
    /// Zone-11 NAD83 UTM coordinates.
    Utm,
}

impl FromStr for ConversionTarget {
    type Err = Error;

    fn from_str(value: &str) -> Result<ConversionTarget, Error> {
        match value.to_uppercase().as_str() {
            "GEO" => Ok(ConversionTarget::Geo),
            "UTM" => Ok(ConversionTarget::Utm),
            other => Err(Error::InvalidCoord(format!(
                "Conversion target '{other}' must be UTM or GEO"
            ))),
        }
    }
}

/// One row of field survey data: the columns as captured, plus the derived
/// columns the conversion pipeline fills in.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurveyRecord {
    #[cfg_attr(feature = "serde", serde(rename = "ID"))]
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "Species"))]
    pub species: String,
    pub datum: String,
    pub geo_x: String,
    pub geo_y: String,

    #[cfg_attr(feature = "serde", serde(rename = "SpeciesID", default))]
    pub species_id: i32,
    #[cfg_attr(feature = "serde", serde(rename = "Converts", default))]
    pub converts: String,
    #[cfg_attr(feature = "serde", serde(rename = "cnv_DATUM", default))]
    pub cnv_datum: String,
    #[cfg_attr(feature = "serde", serde(rename = "cnv_X", default))]
    pub cnv_x: f64,
    #[cfg_attr(feature = "serde", serde(rename = "cnv_Y", default))]
    pub cnv_y: f64,
    #[cfg_attr(feature = "serde", serde(rename = "inRegion", default))]
    pub in_region: Option<i32>,
}

impl SurveyRecord {
    pub fn new(
        id: impl Into<String>,
        species: impl Into<String>,
        datum: impl Into<String>,
        geo_x: impl Into<String>,
        geo_y: impl Into<String>,
    ) -> SurveyRecord {
        SurveyRecord {
            id: id.into(),
            species: species.into(),
            datum: datum.into(),
            geo_x: geo_x.into(),
            geo_y: geo_y.into(),
            ..SurveyRecord::default()
        }
    }

    pub fn has_location(&self) -> bool {
        !NO_LOCATION_TAGS.contains(&self.datum.as_str())
    }

    pub fn converted(&self) -> bool {
        (self.cnv_x - UNCONVERTIBLE).abs() > f64::EPSILON && !self.cnv_datum.is_empty()
    }
}

/// Converts a batch of records in place, in parallel; each record is an
/// independent unit of work and failures never cross record boundaries.
pub fn convert_records(
    records: &mut [SurveyRecord],
    target: ConversionTarget,
    species: &SpeciesTable,
    region: Option<&RegionSet>,
) {
    records
        .par_iter_mut()
        .for_each(|record| convert_record(record, target, species, region));
}

/// Fills the derived columns of one record: species ID, converted
/// coordinates, and the region flag when a boundary is supplied.
///
/// A record without a usable location, or whose coordinates fail to
/// convert, keeps the [`UNCONVERTIBLE`] sentinel instead of aborting the
/// batch; the failure reason lands in the `Converts` column and the log.
pub fn convert_record(
    record: &mut SurveyRecord,
    target: ConversionTarget,
    species: &SpeciesTable,
    region: Option<&RegionSet>,
) {
    record.species_id = species.lookup_or_unmatched(&record.species);

    if !record.has_location() {
        record.converts = "no geo location".to_string();
        record.cnv_datum = record.datum.clone();
        record.cnv_x = UNCONVERTIBLE;
        record.cnv_y = UNCONVERTIBLE;
        record.in_region = region.map(|_| 0);
        return;
    }

    match convert_coordinate(record, target) {
        Ok((note, tag, x, y)) => {
            record.converts = note;
            record.cnv_datum = tag;
            record.cnv_x = x;
            record.cnv_y = y;

            if let Some(set) = region {
                let outline = match target {
                    ConversionTarget::Geo => &set.geo,
                    ConversionTarget::Utm => &set.utm,
                };
                record.in_region = Some(outline.contains(x, y).ternary(1, 0));
            }
        }
        Err(err) => {
            warn!("record {} did not convert: {err}", record.id);
            record.converts = format!("unconvertible: {err}");
            record.cnv_datum = record.datum.clone();
            record.cnv_x = UNCONVERTIBLE;
            record.cnv_y = UNCONVERTIBLE;
            record.in_region = region.map(|_| 0);
        }
    }
}

fn convert_coordinate(
    record: &SurveyRecord,
    target: ConversionTarget,
) -> Result<(String, String, f64, f64), Error> {
    let source = GeoCoord::parse(&record.datum, &record.geo_x, &record.geo_y)?;

    let (note, converted) = match target {
        ConversionTarget::Geo => match &source {
            GeoCoord::Dms(_) => ("converted DMS to decimal degrees", source.to_geographic()?),
            GeoCoord::Geographic(_) => ("transferred decimal degrees unchanged", source.clone()),
            GeoCoord::Projected(_) => ("converted UTM to decimal degrees", source.to_geographic()?),
        },
        ConversionTarget::Utm => match &source {
            GeoCoord::Dms(_) => (
                "converted DMS to decimal degrees, then to UTM",
                source.to_projected()?,
            ),
            GeoCoord::Geographic(_) => ("converted decimal degrees to UTM", source.to_projected()?),
            GeoCoord::Projected(_) => ("transferred UTM unchanged", source.clone()),
        },
    };

    let (x, y) = converted.numeric_xy().ok_or_else(|| {
        Error::InvalidCoord("conversion produced no numeric coordinates".to_string())
    })?;

    Ok((note.to_string(), converted.format_tag().to_string(), x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    fn nevada_ish_region() -> RegionSet {
        RegionSet {
            utm: Region::new(vec![
                [200_000.0, 3_900_000.0],
                [800_000.0, 3_900_000.0],
                [800_000.0, 4_600_000.0],
                [200_000.0, 4_600_000.0],
            ]),
            geo: Region::new(vec![
                [-120.0, 35.0],
                [-114.0, 35.0],
                [-114.0, 42.0],
                [-120.0, 42.0],
            ]),
        }
    }

    #[test]
    fn dd_record_to_utm() {
        let mut record = SurveyRecord::new("1", "Desert Tortoise", "DD", "-115.1398", "36.1699");
        convert_record(
            &mut record,
            ConversionTarget::Utm,
            SpeciesTable::builtin(),
            None,
        );

        assert_eq!(record.species_id, 1);
        assert_eq!(record.cnv_datum, "NAD83");
        assert!((record.cnv_x - 667_304.047).abs() < 0.01);
        assert!((record.cnv_y - 4_004_396.315).abs() < 0.01);
        assert_eq!(record.in_region, None);
    }

    #[test]
    fn dms_record_to_geo() {
        let mut record = SurveyRecord::new("2", "chukar", "DMS", "115 08 23", "36 10 11");
        convert_record(
            &mut record,
            ConversionTarget::Geo,
            SpeciesTable::builtin(),
            Some(&nevada_ish_region()),
        );

        assert_eq!(record.species_id, 10);
        assert_eq!(record.cnv_datum, "DD");
        assert!((record.cnv_x - -115.139_722).abs() < 1e-6);
        assert!((record.cnv_y - 36.169_722).abs() < 1e-6);
        assert_eq!(record.in_region, Some(1));
    }

    #[test]
    fn no_location_record_keeps_sentinel() {
        let mut record = SurveyRecord::new("3", "coyote", "desc", "under the big rock", "");
        convert_record(
            &mut record,
            ConversionTarget::Utm,
            SpeciesTable::builtin(),
            Some(&nevada_ish_region()),
        );

        assert_eq!(record.species_id, 6);
        assert_eq!(record.cnv_datum, "desc");
        assert!((record.cnv_x - UNCONVERTIBLE).abs() < f64::EPSILON);
        assert_eq!(record.in_region, Some(0));
        assert!(!record.converted());
    }

    #[test]
    fn malformed_record_fails_alone() {
        let mut records = vec![
            SurveyRecord::new("4", "mule deer", "DMS", "garbage", "36 10 11"),
            SurveyRecord::new("5", "mule deer", "DD", "-115.1398", "36.1699"),
        ];
        convert_records(
            &mut records,
            ConversionTarget::Geo,
            SpeciesTable::builtin(),
            None,
        );

        assert!(!records[0].converted());
        assert!(records[0].converts.starts_with("unconvertible"));
        assert!(records[1].converted());
    }

    #[test]
    fn unknown_species_sentinel() {
        let mut record = SurveyRecord::new("6", "jackalope", "DD", "-115.1398", "36.1699");
        convert_record(
            &mut record,
            ConversionTarget::Geo,
            SpeciesTable::builtin(),
            None,
        );

        assert_eq!(record.species_id, crate::species::UNMATCHED_SPECIES);
        assert!(record.converted());
    }

    #[test]
    fn conversion_target_from_str() {
        assert_eq!("UTM".parse::<ConversionTarget>().unwrap(), ConversionTarget::Utm);
        assert_eq!("geo".parse::<ConversionTarget>().unwrap(), ConversionTarget::Geo);
        assert!("parquet".parse::<ConversionTarget>().is_err());
    }

    #[test]
    fn utm_region_flag_uses_utm_outline() {
        let mut record = SurveyRecord::new("7", "kit fox", "DD", "-115.1398", "36.1699");
        convert_record(
            &mut record,
            ConversionTarget::Utm,
            SpeciesTable::builtin(),
            Some(&nevada_ish_region()),
        );

        assert_eq!(record.in_region, Some(1));
    }
}
