use dataprep_map::{MapperEngine, MappingState};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn infers_common_inventory_headers() {
    let engine = MapperEngine::new();
    let mapping = engine.infer(&columns(&[
        "Unit Code",
        "PRICE (EGP)",
        "Unit Type",
        "Area (sqm)",
        "Sales Status",
        "Notes",
    ]));

    assert_eq!(mapping.column_for("unit_code"), Some("Unit Code"));
    assert_eq!(mapping.column_for("price"), Some("PRICE (EGP)"));
    assert_eq!(mapping.column_for("property_type"), Some("Unit Type"));
    assert_eq!(mapping.column_for("area"), Some("Area (sqm)"));
    assert_eq!(mapping.column_for("status"), Some("Sales Status"));
    assert_eq!(mapping.field_for("Notes"), None);
}

#[test]
fn first_matching_field_in_catalog_order_claims_a_column() {
    // "Unit" matches both unit_code and (via "^type$"... it does not) —
    // pin that the earlier catalog entry wins for an ambiguous header.
    let engine = MapperEngine::new();
    let mapping = engine.infer(&columns(&["Unit", "Code"]));

    // unit_code claims "Unit"; "Code" also matches unit_code but the field
    // is already claimed, and no later field matches it.
    assert_eq!(mapping.column_for("unit_code"), Some("Unit"));
    assert_eq!(mapping.field_for("Code"), None);
}

#[test]
fn a_claimed_column_is_never_double_assigned() {
    let engine = MapperEngine::new();
    let mapping = engine.infer(&columns(&["Price", "Total Price", "Amount"]));

    // price claims the first matching column only.
    assert_eq!(mapping.column_for("price"), Some("Price"));
    assert_eq!(mapping.field_for("Total Price"), None);
    assert_eq!(mapping.field_for("Amount"), None);
}

#[test]
fn inference_is_deterministic() {
    let engine = MapperEngine::new();
    let names = columns(&["Unit Code", "Price", "Status", "Area"]);
    assert_eq!(engine.infer(&names), engine.infer(&names));
}

#[test]
fn state_tracks_missing_required_and_unmapped() {
    let mut state = MappingState::infer(&columns(&["Unit Code", "Notes"]));

    assert_eq!(state.missing_required(), vec!["price"]);
    assert_eq!(state.unmapped_columns(), vec!["Notes"]);

    state.set("price", Some("Notes")).unwrap();
    assert!(state.missing_required().is_empty());
    assert!(state.unmapped_columns().is_empty());

    state.set("price", None).unwrap();
    assert_eq!(state.missing_required(), vec!["price"]);

    let summary = state.summary();
    assert_eq!(summary.required_total, 2);
    assert_eq!(summary.required_mapped, 1);
}
