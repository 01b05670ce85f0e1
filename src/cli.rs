use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::io;
use crate::record::{convert_records, ConversionTarget};
use crate::species::SpeciesTable;

#[derive(Parser)]
#[command(name = "surveyconvert")]
#[command(about = "Convert field survey coordinates between DMS, decimal degree, and UTM")]
#[command(version)]
pub struct Cli {
    /// Input survey CSV
    pub input: PathBuf,

    /// Output CSV with converted coordinates
    #[arg(short, long)]
    pub output: PathBuf,

    /// Conversion target
    #[arg(short, long, value_enum, default_value = "geo")]
    pub to: ConversionTarget,

    /// Region boundary JSON; adds the inRegion column when given
    #[arg(long)]
    pub region: Option<PathBuf>,

    /// Also export the converted points as GeoJSON to this path
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut records = io::read_records(&cli.input)?;
    info!("read {} records from {}", records.len(), cli.input.display());

    let region = match &cli.region {
        Some(path) => Some(io::read_region(path)?),
        None => None,
    };

    convert_records(
        &mut records,
        cli.to,
        SpeciesTable::builtin(),
        region.as_ref(),
    );

    io::write_records(&cli.output, &records)?;
    info!(
        "wrote {} records to {}",
        records.len(),
        cli.output.display()
    );

    if let Some(path) = &cli.geojson {
        io::write_geojson(path, &records)?;
        info!("wrote GeoJSON to {}", path.display());
    }

    Ok(())
}
