use std::path::Path;

use log::info;

use super::{
    config::AccidentDataConfig,
    parser::deserialize_csv_file,
    raw_types::SeveritySummaryRow,
};
use crate::{
    Error,
    model::{AccidentRecord, CoordinateKey, RawAccidentRecord, SeverityTable},
    severity::filter_records,
};

/// Reads and validates accident records, dropping those outside the configured box
///
/// # Errors
///
/// Returns [`Error::Validation`] for a row with a missing or invalid field,
/// I/O and CSV errors otherwise
pub fn load_accident_records(config: &AccidentDataConfig) -> Result<Vec<AccidentRecord>, Error> {
    info!("Loading accident records: {}", config.path.display());
    let raw: Vec<RawAccidentRecord> = deserialize_csv_file(&config.path)?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(AccidentRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    info!("Loaded {} accident records", records.len());

    Ok(match &config.bbox {
        Some(bbox) => filter_records(&records, bbox),
        None => records,
    })
}

/// Writes one `Latitude,Longitude,number_of_accidents,mean_severity_score`
/// row per location, sorted by coordinate
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_severity_table(
    path: &Path,
    table: &SeverityTable<CoordinateKey>,
) -> Result<(), Error> {
    let mut entries: Vec<_> = table.iter().collect();
    entries.sort_by(|(a, _), (b, _)| {
        a.latitude()
            .total_cmp(&b.latitude())
            .then_with(|| a.longitude().total_cmp(&b.longitude()))
    });

    let mut writer = csv::Writer::from_path(path)?;
    for (key, stats) in entries {
        writer.serialize(SeveritySummaryRow {
            latitude: key.latitude(),
            longitude: key.longitude(),
            number_of_accidents: stats.accident_count,
            mean_severity_score: stats.mean_severity_score,
        })?;
    }
    writer.flush()?;

    info!("Severity summary for {} locations written to {}", table.len(), path.display());
    Ok(())
}
