//! CSV ingestion for situation reports.
//!
//! Reads the source export, drops rows without a parseable reporting date,
//! and hands the rest of the crate a clean, fully typed row set.

use crate::models::{RawReport, Report};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no dated records")]
    NoDatedRecords,
}

/// Cleaned dataset plus load diagnostics.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub reports: Vec<Report>,
    /// Rows dropped because the reporting date was missing or invalid.
    pub skipped_rows: usize,
    /// Rows the CSV reader could not decode at all.
    pub malformed_rows: usize,
}

impl Dataset {
    /// Earliest and latest reporting dates present, or `None` when empty.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.reports.iter().map(|r| r.reporting_date).min()?;
        let max = self.reports.iter().map(|r| r.reporting_date).max()?;
        Some((min, max))
    }
}

/// Load and clean a situation-report CSV from disk.
pub fn load_reports<P: AsRef<Path>>(path: P) -> Result<Dataset, IngestError> {
    let file = std::fs::File::open(path)?;
    read_reports(file)
}

/// Load and clean situation reports from any CSV reader.
pub fn read_reports<R: Read>(reader: R) -> Result<Dataset, IngestError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut reports = Vec::new();
    let mut skipped_rows = 0usize;
    let mut malformed_rows = 0usize;

    for (idx, result) in rdr.deserialize::<RawReport>().enumerate() {
        let raw = match result {
            Ok(r) => r,
            Err(e) => {
                log::debug!("row {}: undecodable record: {}", idx, e);
                malformed_rows += 1;
                continue;
            }
        };
        match Report::from_raw(&raw, idx) {
            Some(report) => reports.push(report),
            None => {
                log::debug!(
                    "row {}: skipped, unparseable reporting_date {:?}",
                    idx,
                    raw.reporting_date
                );
                skipped_rows += 1;
            }
        }
    }

    if reports.is_empty() {
        return Err(IngestError::NoDatedRecords);
    }

    log::info!(
        "loaded {} reports ({} dateless, {} malformed)",
        reports.len(),
        skipped_rows,
        malformed_rows
    );

    Ok(Dataset {
        reports,
        skipped_rows,
        malformed_rows,
    })
}
