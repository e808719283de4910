//! Integration tests for the reshaper: end-to-end scenarios, ordering and
//! idempotence.

use lifex_model::{Observation, PipelineError, RawTable, Region, WIDE_KEY_COLUMN};
use lifex_transform::{filter_region, reshape};

fn wide_table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

#[test]
fn single_cell_end_to_end() {
    let table = wide_table(
        &[WIDE_KEY_COLUMN, "2020"],
        &[&["YR,M,Y_LT1,PT", "78.5 e"]],
    );

    let rows = reshape(&table).unwrap();
    assert_eq!(
        rows,
        vec![Observation {
            unit: "YR".to_string(),
            sex: "M".to_string(),
            age: "Y_LT1".to_string(),
            region: "PT".to_string(),
            year: 2020,
            life_expectancy: 78.5,
        }]
    );

    assert_eq!(filter_region(&rows, Some(Region::PT)), rows);
    assert!(filter_region(&rows, Some(Region::FR)).is_empty());
}

#[test]
fn output_is_row_major_in_header_year_order() {
    let table = wide_table(
        &[WIDE_KEY_COLUMN, "2021", "2020"],
        &[
            &["YR,M,Y_LT1,PT", "79.0", "78.5"],
            &["YR,F,Y_LT1,PT", "84.0", "83.5"],
        ],
    );

    let rows = reshape(&table).unwrap();
    let order: Vec<(&str, i32)> = rows.iter().map(|r| (r.sex.as_str(), r.year)).collect();
    // All years of a source row before the next source row; years in the
    // order the header listed them.
    assert_eq!(order, [("M", 2021), ("M", 2020), ("F", 2021), ("F", 2020)]);
}

#[test]
fn placeholder_cells_are_dropped_not_errors() {
    let table = wide_table(
        &[WIDE_KEY_COLUMN, "2019", "2020", "2021"],
        &[&["YR,M,Y_LT1,PT", ":", "78.5 e", "0"]],
    );

    let rows = reshape(&table).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].year, 2020);
    assert_eq!(rows[1].year, 2021);
    assert_eq!(rows[1].life_expectancy, 0.0);
}

#[test]
fn key_column_position_does_not_matter() {
    let table = wide_table(
        &["2020", WIDE_KEY_COLUMN],
        &[&["78.5", "YR,M,Y_LT1,PT"]],
    );
    let rows = reshape(&table).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].region, "PT");
    assert_eq!(rows[0].life_expectancy, 78.5);
}

#[test]
fn malformed_key_aborts_the_run() {
    let table = wide_table(&[WIDE_KEY_COLUMN, "2020"], &[&["YR,M", "78.5"]]);
    assert!(matches!(
        reshape(&table),
        Err(PipelineError::MalformedKey { found: 2, .. })
    ));
}

#[test]
fn reshape_is_idempotent_on_its_own_output() {
    let table = wide_table(
        &[WIDE_KEY_COLUMN, "2020", "2021"],
        &[
            &["YR,M,Y_LT1,PT", "78.5 e", ":"],
            &["YR,F,Y_LT1,FR", "85.1", "85.3 b"],
        ],
    );
    let first = reshape(&table).unwrap();

    // Re-encode the long output as a raw table, the shape a previously
    // cleaned CSV would load as.
    let long = RawTable::new(
        lifex_model::REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        first
            .iter()
            .map(|row| {
                vec![
                    row.unit.clone(),
                    row.sex.clone(),
                    row.age.clone(),
                    row.region.clone(),
                    row.year.to_string(),
                    row.life_expectancy.to_string(),
                ]
            })
            .collect(),
    );

    let second = reshape(&long).unwrap();
    assert_eq!(second, first);
}

#[test]
fn long_input_extra_columns_are_projected_away() {
    let table = wide_table(
        &["unit", "sex", "age", "region", "year", "life_expectancy", "flag"],
        &[&["YR", "M", "Y_LT1", "PT", "2020", "78.5", "e"]],
    );
    let rows = reshape(&table).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].life_expectancy, 78.5);
}

#[test]
fn long_input_missing_value_column_fails_naming_it() {
    let table = wide_table(
        &["unit", "sex", "age", "region", "year"],
        &[&["YR", "M", "Y_LT1", "PT", "2020"]],
    );
    let error = reshape(&table).unwrap_err();
    match error {
        PipelineError::MissingColumns { missing, available } => {
            assert_eq!(missing, vec!["life_expectancy".to_string()]);
            assert!(available.contains(&"year".to_string()));
        }
        other => panic!("expected MissingColumns, got {other}"),
    }
}

#[test]
fn long_input_invalid_year_aborts() {
    let table = wide_table(
        &["unit", "sex", "age", "region", "year", "life_expectancy"],
        &[&["YR", "M", "Y_LT1", "PT", "20x0", "78.5"]],
    );
    assert!(matches!(
        reshape(&table),
        Err(PipelineError::InvalidYear { .. })
    ));
}
