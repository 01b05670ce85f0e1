//! File exchange for the record pipeline: survey CSV in/out, the region
//! boundary file, and GeoJSON export of converted points.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::record::SurveyRecord;
use crate::region::RegionSet;
use crate::Error;

/// Reads a survey CSV. Only the captured columns (`ID, Species, datum,
/// geo_x, geo_y`) are required; derived columns are filled with defaults
/// when absent.
///
/// # Errors
///
/// Returns [`Error::Io`] / [`Error::Csv`] on unreadable files or rows.
pub fn read_records(path: &Path) -> Result<Vec<SurveyRecord>, Error> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }

    Ok(records)
}

/// Writes records, derived columns included, to a CSV file.
///
/// # Errors
///
/// Returns [`Error::Io`] / [`Error::Csv`] on write failure.
pub fn write_records(path: &Path, records: &[SurveyRecord]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Reads the region boundary file: a JSON object with `UTM` and `GEO`
/// outlines as `[x, y]` vertex arrays.
///
/// # Errors
///
/// Returns [`Error::Io`] / [`Error::Json`] on unreadable or malformed
/// files.
pub fn read_region(path: &Path) -> Result<RegionSet, Error> {
    let file = File::open(path)?;
    let set = serde_json::from_reader(file)?;
    Ok(set)
}

#[derive(Serialize)]
struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature<'a>>,
}

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: Properties<'a>,
    geometry: Geometry,
}

#[derive(Serialize)]
struct Properties<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    #[serde(rename = "Species")]
    species: &'a str,
    #[serde(rename = "X")]
    x: &'a str,
    #[serde(rename = "Y")]
    y: &'a str,
}

#[derive(Serialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

/// Writes converted records as a GeoJSON `FeatureCollection` of points,
/// keeping the source coordinates in each feature's properties for
/// reference.
///
/// # Errors
///
/// Returns [`Error::Io`] / [`Error::Json`] on write failure.
pub fn write_geojson(path: &Path, records: &[SurveyRecord]) -> Result<(), Error> {
    let features = records
        .iter()
        .map(|record| Feature {
            kind: "Feature",
            properties: Properties {
                id: &record.id,
                species: &record.species,
                x: &record.geo_x,
                y: &record.geo_y,
            },
            geometry: Geometry {
                kind: "Point",
                coordinates: [record.cnv_x, record.cnv_y],
            },
        })
        .collect();

    let collection = FeatureCollection {
        kind: "FeatureCollection",
        features,
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &collection)?;

    Ok(())
}
