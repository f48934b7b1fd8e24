//! CSV to [`Dataset`] conversion.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use dataprep_model::{CellValue, Dataset, Row};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads a CSV file into a [`Dataset`].
pub fn read_csv_path(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_csv_reader(file)?;
    debug!(
        path = %path.display(),
        columns = dataset.column_count(),
        rows = dataset.row_count(),
        "loaded CSV dataset"
    );
    Ok(dataset)
}

/// Reads CSV content from any reader into a [`Dataset`].
///
/// Headers are made distinct (empty names get positional names, duplicates a
/// numeric suffix). Short rows are padded with [`CellValue::Missing`] so the
/// dataset invariant holds from the first moment.
pub fn read_csv_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestError::MissingHeader);
    }
    let columns = distinct_columns(&headers);

    let mut dataset = Dataset::new(columns.clone());
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (index, column) in columns.iter().enumerate() {
            let cell = record
                .get(index)
                .map_or(CellValue::Missing, sniff_cell);
            row.insert(column.clone(), cell);
        }
        dataset.push_row(row);
    }
    Ok(dataset)
}

/// Writes a [`Dataset`] to a CSV file with stringified cells.
pub fn write_csv_path(path: &Path, dataset: &Dataset) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_writer(file, dataset)
}

/// Writes a [`Dataset`] as CSV to any writer.
pub fn write_csv_writer<W: Write>(writer: W, dataset: &Dataset) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&dataset.columns)?;
    for index in 0..dataset.row_count() {
        let record: Vec<String> = dataset
            .columns
            .iter()
            .map(|column| dataset.cell_text(index, column))
            .collect();
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush().map_err(|source| IngestError::FileWrite {
        path: Path::new("<writer>").to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Makes header names non-empty and unique, preserving order.
fn distinct_columns(headers: &csv::StringRecord) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(headers.len());
    for (index, raw) in headers.iter().enumerate() {
        let base = if raw.trim().is_empty() {
            format!("Column {}", index + 1)
        } else {
            raw.trim().to_string()
        };
        let mut name = base.clone();
        let mut suffix = 2;
        while columns.contains(&name) {
            name = format!("{base} ({suffix})");
            suffix += 1;
        }
        columns.push(name);
    }
    columns
}

/// Best-effort typed reading of a raw cell.
fn sniff_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Missing;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if looks_numeric(trimmed)
        && let Ok(value) = trimmed.parse::<f64>()
        && value.is_finite()
    {
        return CellValue::Number(value);
    }
    CellValue::Text(raw.to_string())
}

// Guards the f64 parse against words it would accept ("inf", "NaN").
fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'))
        && value.chars().any(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_numbers_bools_and_text() {
        assert_eq!(sniff_cell("120"), CellValue::Number(120.0));
        assert_eq!(sniff_cell("1.5"), CellValue::Number(1.5));
        assert_eq!(sniff_cell("TRUE"), CellValue::Bool(true));
        assert_eq!(sniff_cell("A-100"), CellValue::Text("A-100".into()));
        assert_eq!(sniff_cell("NaN"), CellValue::Text("NaN".into()));
        assert_eq!(sniff_cell("   "), CellValue::Missing);
    }

    #[test]
    fn distinct_columns_rename_duplicates_and_blanks() {
        let headers = csv::StringRecord::from(vec!["Unit", "", "Unit", "Unit"]);
        assert_eq!(
            distinct_columns(&headers),
            vec!["Unit", "Column 2", "Unit (2)", "Unit (3)"]
        );
    }
}
