//! CSV loader for solar power-plant records.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;

use mgplan_core::PowerPlant;

/// One row of the plant dataset. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct PlantRecord {
    latitude: f64,
    longitude: f64,
    #[serde(rename = "Total price")]
    total_price: f64,
}

impl From<PlantRecord> for PowerPlant {
    fn from(r: PlantRecord) -> Self {
        PowerPlant::new(r.latitude, r.longitude, r.total_price)
    }
}

/// Load power-plant records from a delimited file.
///
/// The file carries one metadata line above the header row; it is skipped
/// before parsing. Fails when the `latitude`, `longitude` or `Total price`
/// columns are absent, or when no data rows remain.
pub fn load_plants<P: AsRef<Path>>(path: P) -> Result<Vec<PowerPlant>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening plant dataset {path:?}"))?;
    let mut reader = BufReader::new(file);

    // One free-text metadata line sits above the header row.
    let mut metadata_line = String::new();
    reader
        .read_line(&mut metadata_line)
        .with_context(|| format!("reading metadata line of {path:?}"))?;

    load_plants_from_reader(reader)
        .with_context(|| format!("parsing plant dataset {path:?}"))
}

/// Parse plant records from a reader already positioned at the header row.
pub fn load_plants_from_reader<R: Read>(reader: R) -> Result<Vec<PowerPlant>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers().context("reading header row")?.clone();
    for required in ["latitude", "longitude", "Total price"] {
        if !headers.iter().any(|h| h == required) {
            bail!("required column {required:?} missing from header {headers:?}");
        }
    }

    let mut plants = Vec::new();
    for result in rdr.deserialize() {
        let record: PlantRecord = result.context("parsing plant record")?;
        plants.push(record.into());
    }

    if plants.is_empty() {
        bail!("plant dataset contains no data rows");
    }

    Ok(plants)
}
