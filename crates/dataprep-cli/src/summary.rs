//! Terminal tables for mapping and review output.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dataprep_model::{Importance, schema_fields};

use dataprep_cli::pipeline::ImportResult;

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Importance"),
        header_cell("Patterns"),
    ]);
    apply_table_style(&mut table);
    for field in schema_fields() {
        table.add_row(vec![
            Cell::new(field.id),
            Cell::new(field.label),
            importance_cell(field.importance),
            Cell::new(field.patterns.join("  ")),
        ]);
    }
    println!("{table}");
}

pub fn print_mapping(result: &MappingView<'_>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Importance"),
        header_cell("Column"),
    ]);
    apply_table_style(&mut table);
    for field in schema_fields() {
        let column = result.mapping.column_for(field.id);
        let column_cell = match column {
            Some(column) => Cell::new(column).fg(Color::Green),
            None if field.required => Cell::new("MISSING")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(field.id),
            importance_cell(field.importance),
            column_cell,
        ]);
    }
    println!("{table}");

    if !result.unmapped.is_empty() {
        println!("Unmapped columns: {}", result.unmapped.join(", "));
    }
    if !result.missing_required.is_empty() {
        eprintln!(
            "Missing required fields: {}",
            result.missing_required.join(", ")
        );
    }
}

/// Borrowed view handed to [`print_mapping`] by both `map` and `import`.
pub struct MappingView<'a> {
    pub mapping: &'a dataprep_model::ColumnMapping,
    pub unmapped: Vec<String>,
    pub missing_required: Vec<&'static str>,
}

pub fn print_import_summary(result: &ImportResult) {
    println!("Source: {}", result.source.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Mapped"),
        header_cell("Required"),
        header_cell("Transformations"),
        header_cell("Cleanup"),
        header_cell("Issues"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.review.row_count),
        Cell::new(result.review.column_count),
        Cell::new(format!(
            "{}/{}",
            result.review.mapped_fields, result.review.total_fields
        )),
        Cell::new(format!(
            "{}/{}",
            result.mapping_summary.required_mapped, result.mapping_summary.required_total
        )),
        Cell::new(result.review.transformation_count),
        Cell::new(result.review.cleanup_count),
        count_cell(result.review.issue_count, Color::Red),
    ]);
    println!("{table}");

    if !result.review.touched_columns.is_empty() {
        println!(
            "Columns touched by transformations: {}",
            result.review.touched_columns.join(", ")
        );
    }
    print_issue_table(result);
    if result.review.is_ready() {
        println!("Ready to import.");
    } else {
        eprintln!("Not ready: resolve the findings above before importing.");
    }
}

fn print_issue_table(result: &ImportResult) {
    if result.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Issue"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in &result.issues {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(issue.column.clone()),
            Cell::new(issue.issue.clone()).fg(Color::Red),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn importance_cell(importance: Importance) -> Cell {
    match importance {
        Importance::Mandatory => Cell::new("mandatory")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Importance::Important => Cell::new("important").fg(Color::Yellow),
        Importance::Optional => dim_cell("optional"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
