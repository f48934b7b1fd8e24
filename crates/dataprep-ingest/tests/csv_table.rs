use std::io::Write;

use dataprep_ingest::{read_csv_path, read_csv_reader, write_csv_writer};
use dataprep_model::CellValue;

const SAMPLE: &str = "\
Unit Code,Price,Status,Delivered
A-100,500000,Available,true
B-200,2000000,sold,false
C-300,,reserved,
";

#[test]
fn reads_headers_and_typed_cells() {
    let dataset = read_csv_reader(SAMPLE.as_bytes()).expect("read sample");

    assert_eq!(
        dataset.columns,
        vec!["Unit Code", "Price", "Status", "Delivered"]
    );
    assert_eq!(dataset.row_count(), 3);
    assert_eq!(dataset.cell(0, "Price"), Some(&CellValue::Number(500000.0)));
    assert_eq!(dataset.cell(0, "Delivered"), Some(&CellValue::Bool(true)));
    assert_eq!(
        dataset.cell(0, "Unit Code"),
        Some(&CellValue::Text("A-100".into()))
    );
}

#[test]
fn every_row_carries_every_column() {
    let dataset = read_csv_reader(SAMPLE.as_bytes()).expect("read sample");

    assert!(dataset.is_normalized());
    assert_eq!(dataset.cell(2, "Price"), Some(&CellValue::Missing));
    assert_eq!(dataset.cell(2, "Delivered"), Some(&CellValue::Missing));
}

#[test]
fn short_rows_are_padded() {
    let input = "A,B,C\n1,2\n";
    let dataset = read_csv_reader(input.as_bytes()).expect("read short row");
    assert_eq!(dataset.cell(0, "C"), Some(&CellValue::Missing));
}

#[test]
fn round_trips_through_a_file() {
    let dataset = read_csv_reader(SAMPLE.as_bytes()).expect("read sample");

    let mut buffer = Vec::new();
    write_csv_writer(&mut buffer, &dataset).expect("write dataset");
    let round = read_csv_reader(buffer.as_slice()).expect("re-read dataset");

    assert_eq!(round.columns, dataset.columns);
    assert_eq!(round.row_count(), dataset.row_count());
    assert_eq!(round.cell_text(1, "Price"), "2000000");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("units.csv");
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(&buffer).expect("write file");

    let from_disk = read_csv_path(&path).expect("read from disk");
    assert_eq!(from_disk.columns, dataset.columns);
}
