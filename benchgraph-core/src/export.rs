use std::path::Path;

use crate::report::Report;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("write csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv io: {0}")]
    Io(#[from] std::io::Error),
}

pub const CSV_HEADER: [&str; 3] = ["Method", "Configuration", "RequestsPerSecond"];

/// Flattens the report into one row per sample, method order then encounter
/// order, overwriting `path`.
pub fn write_csv(report: &Report, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for (method, sample) in report.iter() {
        writer.write_record([
            method.to_string(),
            sample.config.clone(),
            sample.value.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
