//! Field/grouping dispatch tests: field type parsing, the well property
//! accessor table and group classification.

mod common;

use platechart_sdk::error::ChartError;
use platechart_sdk::fields::GroupBy;

// ---------------------------------------------------------------------------
// Field type dispatch
// ---------------------------------------------------------------------------

#[test]
fn unknown_field_type_is_rejected() {
    let sdk = common::sample_sdk();
    let err = sdk
        .charts()
        .resolve_field_values(1, None, "row", "PLATE_PROPERTY")
        .unwrap_err();
    assert!(matches!(err, ChartError::UnknownFieldType(t) if t == "PLATE_PROPERTY"));
}

#[test]
fn unknown_well_property_is_rejected() {
    let sdk = common::sample_sdk();
    let err = sdk
        .charts()
        .resolve_field_values(1, None, "wellColor", "WELL_PROPERTY")
        .unwrap_err();
    assert!(matches!(err, ChartError::UnknownField(f) if f == "wellColor"));
    assert!(sdk
        .charts()
        .resolve_field_values(1, None, "wellColor", "WELL_PROPERTY")
        .unwrap_err()
        .is_client_error());
}

// ---------------------------------------------------------------------------
// Well property accessors
// ---------------------------------------------------------------------------

#[test]
fn well_id_row_and_column_resolve_in_well_order() {
    let sdk = common::sample_sdk();
    let charts = sdk.charts();

    let ids = charts.resolve_field_values(1, None, "wellId", "WELL_PROPERTY").unwrap();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let rows = charts.resolve_field_values(1, None, "row", "WELL_PROPERTY").unwrap();
    assert_eq!(rows, vec!["1", "1", "2"]);

    let cols = charts.resolve_field_values(1, None, "column", "WELL_PROPERTY").unwrap();
    assert_eq!(cols, vec!["1", "2", "1"]);
}

#[test]
fn well_nr_is_position_on_the_plate_grid() {
    // The plate is 2 columns wide, so (r2, c1) is well number 3.
    let sdk = common::sample_sdk();
    let nrs = sdk
        .charts()
        .resolve_field_values(1, None, "wellNr", "WELL_PROPERTY")
        .unwrap();
    assert_eq!(nrs, vec!["1", "2", "3"]);
}

#[test]
fn substance_properties_are_blank_for_substance_free_wells() {
    let sdk = common::sample_sdk();
    let charts = sdk.charts();

    let names = charts
        .resolve_field_values(1, None, "wellSubstance", "WELL_PROPERTY")
        .unwrap();
    assert_eq!(names, vec!["Filler", "Filler", ""]);

    let concentrations = charts
        .resolve_field_values(1, None, "wellConcentration", "WELL_PROPERTY")
        .unwrap();
    assert_eq!(concentrations, vec!["0.01", "0.02", ""]);
}

#[test]
fn well_type_resolves() {
    let sdk = common::sample_sdk();
    let types = sdk
        .charts()
        .resolve_field_values(1, None, "wellType", "WELL_PROPERTY")
        .unwrap();
    assert_eq!(types, vec!["Sample", "Sample", "Control"]);
}

// ---------------------------------------------------------------------------
// Group classification
// ---------------------------------------------------------------------------

#[test]
fn group_by_parse_is_case_insensitive() {
    assert_eq!(GroupBy::parse("WellType").unwrap(), GroupBy::WellType);
    assert_eq!(GroupBy::parse("SUBSTANCE").unwrap(), GroupBy::Substance);
    assert_eq!(GroupBy::parse("Status").unwrap(), GroupBy::Status);
}

#[test]
fn unsupported_group_by_is_rejected() {
    let err = GroupBy::parse("plate").unwrap_err();
    assert!(matches!(err, ChartError::UnsupportedGroupBy(g) if g == "plate"));
    assert!(GroupBy::parse("plate").unwrap_err().is_client_error());
}

#[test]
fn none_grouping_labels_every_well_identically() {
    let group_by = GroupBy::parse("none").unwrap();
    let wells = [
        common::well(1, 1, 1, "Sample", None),
        common::well(2, 1, 2, "Control", None),
        common::well(3, 2, 1, "LC", None),
    ];
    let labels: Vec<String> = wells.iter().map(|w| group_by.classify(w)).collect();
    assert!(labels.iter().all(|l| l == "none"));
}

#[test]
fn substance_grouping_blanks_wells_without_substance() {
    let group_by = GroupBy::parse("substance").unwrap();
    let with = common::well(1, 1, 1, "Sample", Some(("Filler", 0.5)));
    let without = common::well(2, 1, 2, "Sample", None);
    assert_eq!(group_by.classify(&with), "Filler");
    assert_eq!(group_by.classify(&without), "");
}
