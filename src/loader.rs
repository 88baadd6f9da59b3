//! Salary dataset loading and export utilities
//!
//! The input is a comma-separated file with a header row. Loading is
//! all-or-nothing: the first missing column or malformed row aborts the load
//! and no partial dataset is returned. Export writes the header and rows back
//! in the column order the dataset was read with.

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{Result, SalaryError};
use crate::models::{Dataset, SalaryRecord};
use crate::schema::{Schema, check_header};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Read a salary dataset file into memory
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    log_operation_start("Loading salary dataset from", path.display());
    let start = Instant::now();

    let file = safe_open_file(path, "loading salary dataset")?;
    let dataset = read_dataset(file, &path.display().to_string())?;
    if dataset.is_empty() {
        log_warning("Salary dataset has no rows", Some(&path.display()));
    }

    log_operation_complete(
        "loaded",
        path.display(),
        dataset.len(),
        Some(start.elapsed()),
    );
    Ok(dataset)
}

/// Read a salary dataset from any reader
///
/// `source_name` labels the input in error messages.
pub fn read_dataset<R: Read>(reader: R, source_name: &str) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let header = csv_reader.headers()?.clone();
    let report = check_header(&header);
    for issue in &report.issues {
        log::warn!("{source_name}: {}", issue.description);
    }
    let schema = Schema::from_header(&header, source_name)?;
    if schema.extra_column_count() > 0 {
        log::debug!(
            "{source_name} has {} additional columns that will be carried through",
            schema.extra_column_count()
        );
    }

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);
        records.push(schema.parse_row(&row, line)?);
    }

    Ok(Dataset::with_schema(schema, records))
}

/// Write a dataset as CSV using its schema's column order
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    write_records(dataset.schema(), dataset.records(), writer)
}

/// Write records laid out by `schema`
pub fn write_records<W: Write>(schema: &Schema, records: &[SalaryRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(schema.columns())?;
    for record in records {
        csv_writer.write_record(schema.format_row(record))?;
    }
    csv_writer.flush().map_err(SalaryError::from)?;
    Ok(())
}

/// Serialize a dataset to an in-memory CSV document
pub fn to_csv_bytes(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_dataset(dataset, &mut buffer)?;
    Ok(buffer)
}

/// Export a dataset to a file
pub fn export_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    log_operation_start("Exporting salary dataset to", path.display());
    let start = Instant::now();

    let file = safe_create_file(path, "exporting salary dataset")?;
    write_dataset(dataset, file)?;

    log::info!(
        "Exported {} records to {} in {:?}",
        dataset.len(),
        path.display(),
        start.elapsed()
    );
    Ok(())
}
