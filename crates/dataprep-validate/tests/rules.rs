use dataprep_model::{CellValue, ColumnMapping, Dataset, Row, ValidationIssue};
use dataprep_validate::{Revalidator, validate};

fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
    let mut out = Dataset::new(columns.iter().map(ToString::to_string).collect());
    for cells in rows {
        let row: Row = columns
            .iter()
            .zip(cells.iter())
            .map(|(column, value)| (column.to_string(), CellValue::Text(value.to_string())))
            .collect();
        out.push_row(row);
    }
    out
}

fn mapping(pairs: &[(&str, &str)]) -> ColumnMapping {
    let mut out = ColumnMapping::new();
    for (field, column) in pairs {
        out.set(field, Some(column)).expect("valid assignment");
    }
    out
}

#[test]
fn flags_non_numeric_price_with_row_number_and_raw_value() {
    let data = dataset(
        &["Unit", "Price (EGP)"],
        &[&["A-1", "1200000"], &["A-2", "1,500,000"], &["A-3", "N/A"]],
    );
    let map = mapping(&[("unit_code", "Unit"), ("price", "Price (EGP)")]);

    let issues = validate(&data, &map);
    assert_eq!(
        issues,
        vec![ValidationIssue::new(
            3,
            "Price (EGP)",
            "Invalid price format: \"N/A\"",
        )]
    );
}

#[test]
fn flags_unknown_status_values() {
    let data = dataset(
        &["Status"],
        &[&["Available"], &["pending"], &["Sold"], &["On Hold"]],
    );
    let map = mapping(&[("status", "Status")]);

    let issues = validate(&data, &map);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].row, 2);
    assert_eq!(issues[0].issue, "Invalid status value: \"pending\"");
}

#[test]
fn empty_cells_are_not_findings() {
    let data = dataset(&["Price", "Status"], &[&["", ""]]);
    let map = mapping(&[("price", "Price"), ("status", "Status")]);
    assert!(validate(&data, &map).is_empty());
}

#[test]
fn unmapped_rules_do_not_run() {
    let data = dataset(&["Price"], &[&["garbage"]]);
    // Nothing mapped: the price column is never examined.
    assert!(validate(&data, &ColumnMapping::new()).is_empty());
}

#[test]
fn rule_order_is_price_then_area_then_status() {
    let data = dataset(
        &["Price", "Area", "Status"],
        &[&["bad", "also bad", "nope"]],
    );
    let map = mapping(&[("price", "Price"), ("area", "Area"), ("status", "Status")]);

    let issues = validate(&data, &map);
    let columns: Vec<&str> = issues.iter().map(|issue| issue.column.as_str()).collect();
    assert_eq!(columns, vec!["Price", "Area", "Status"]);
}

#[test]
fn validation_is_idempotent() {
    let data = dataset(&["Price"], &[&["N/A"], &["5"], &["TBD"]]);
    let map = mapping(&[("price", "Price")]);

    let first = validate(&data, &map);
    let second = validate(&data, &map);
    assert_eq!(first, second);
}

#[test]
fn revalidator_skips_unchanged_inputs() {
    let data = dataset(&["Price"], &[&["N/A"]]);
    let map = mapping(&[("price", "Price")]);
    let mut revalidator = Revalidator::new();

    let first = revalidator.refresh(&data, &map).expect("first pass runs");
    assert_eq!(first.len(), 1);

    // Structurally identical inputs short-circuit.
    assert!(revalidator.refresh(&data, &map).is_none());
    assert_eq!(revalidator.issues().len(), 1);

    // Any cell change re-runs the pass.
    let mut changed = data.clone();
    changed.rows[0].insert("Price".into(), CellValue::Text("100".into()));
    let issues = revalidator.refresh(&changed, &map).expect("re-runs");
    assert!(issues.is_empty());
}

#[test]
fn revalidator_suppresses_identical_issue_lists() {
    let data = dataset(&["Price", "Notes"], &[&["N/A", "call back"]]);
    let map = mapping(&[("price", "Price")]);
    let mut revalidator = Revalidator::new();

    let first = revalidator.refresh(&data, &map).expect("first pass runs");
    assert_eq!(first.len(), 1);

    // Editing a column no rule examines recomputes the same issue list, so
    // the result is suppressed even though the dataset changed.
    let mut edited = data.clone();
    edited.rows[0].insert("Notes".into(), CellValue::Text("done".into()));
    assert!(revalidator.refresh(&edited, &map).is_none());
    assert_eq!(revalidator.issues().len(), 1);
}

#[test]
fn revalidator_reacts_to_mapping_changes_too() {
    let data = dataset(&["Price", "Other"], &[&["N/A", "N/A"]]);
    let map = mapping(&[("price", "Price")]);
    let mut revalidator = Revalidator::new();
    revalidator.refresh(&data, &map).expect("first pass runs");

    let mut remapped = map.clone();
    remapped.set("price", Some("Other")).expect("valid");
    let issues = revalidator.refresh(&data, &remapped).expect("re-runs");
    assert_eq!(issues[0].column, "Other");
}
