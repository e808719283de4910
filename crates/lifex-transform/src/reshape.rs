//! Wide-to-long reshaping and validation.
//!
//! Wide inputs (one column per year, composite key column) are unpivoted
//! into one observation per (row, year column). Inputs without the composite
//! key column are assumed to be long already and only get column projection
//! and type coercion, so re-running the reshaper on its own output is a
//! no-op.

use tracing::debug;

use lifex_model::{
    Observation, PipelineError, RawTable, REQUIRED_COLUMNS, Result, WIDE_KEY_COLUMN,
};

use crate::numeric::extract_leading_numeric;

/// Reshapes a raw table into typed long-format observations.
///
/// Output order is row-major: original row order, then year-column order as
/// encountered in the header. Rows whose value has no leading numeric token
/// are dropped; structural problems (key shape, year labels, missing
/// columns) abort with an error.
pub fn reshape(table: &RawTable) -> Result<Vec<Observation>> {
    match table.column_index(WIDE_KEY_COLUMN) {
        Some(key_index) => reshape_wide(table, key_index),
        None => project_long(table),
    }
}

/// Splits the composite key into (unit, sex, age, region).
///
/// The split is capped at 4 fields: a 5th comma is swallowed verbatim into
/// the region field. This mirrors the source data contract; keys with fewer
/// than 4 fields are malformed.
pub fn split_key(key: &str) -> Result<(String, String, String, String)> {
    let parts: Vec<&str> = key.splitn(4, ',').collect();
    if parts.len() < 4 {
        return Err(PipelineError::MalformedKey {
            key: key.to_string(),
            found: parts.len(),
        });
    }
    Ok((
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
        parts[3].to_string(),
    ))
}

fn parse_year(label: &str) -> Result<i32> {
    label
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|year| *year >= 0)
        .ok_or_else(|| PipelineError::InvalidYear {
            label: label.to_string(),
        })
}

fn reshape_wide(table: &RawTable, key_index: usize) -> Result<Vec<Observation>> {
    // Year labels are validated once per header column, before any row work.
    let mut year_columns = Vec::with_capacity(table.headers.len().saturating_sub(1));
    for (index, header) in table.headers.iter().enumerate() {
        if index == key_index {
            continue;
        }
        year_columns.push((index, parse_year(header)?));
    }

    let mut observations = Vec::new();
    let mut dropped = 0usize;
    for row in &table.rows {
        let key = row.get(key_index).map(String::as_str).unwrap_or("");
        let (unit, sex, age, region) = split_key(key)?;
        for &(index, year) in &year_columns {
            let raw = row.get(index).map(String::as_str).unwrap_or("");
            match extract_leading_numeric(raw) {
                Some(life_expectancy) => observations.push(Observation {
                    unit: unit.clone(),
                    sex: sex.clone(),
                    age: age.clone(),
                    region: region.clone(),
                    year,
                    life_expectancy,
                }),
                None => dropped += 1,
            }
        }
    }
    debug!(kept = observations.len(), dropped, "unpivoted wide table");
    Ok(observations)
}

/// Long-format path: keep exactly the six required columns, coerce types.
fn project_long(table: &RawTable) -> Result<Vec<Observation>> {
    let mut indices = Vec::with_capacity(REQUIRED_COLUMNS.len());
    let mut missing = Vec::new();
    for column in REQUIRED_COLUMNS {
        match table.column_index(column) {
            Some(index) => indices.push(index),
            None => missing.push(column.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(PipelineError::MissingColumns {
            missing,
            available: table.headers.clone(),
        });
    }
    let (unit, sex, age, region, year, value) = (
        indices[0], indices[1], indices[2], indices[3], indices[4], indices[5],
    );

    let mut observations = Vec::new();
    let mut dropped = 0usize;
    for row in &table.rows {
        let cell = |index: usize| row.get(index).map(String::as_str).unwrap_or("");
        let Some(life_expectancy) = extract_leading_numeric(cell(value)) else {
            dropped += 1;
            continue;
        };
        observations.push(Observation {
            unit: cell(unit).to_string(),
            sex: cell(sex).to_string(),
            age: cell(age).to_string(),
            region: cell(region).to_string(),
            year: parse_year(cell(year))?,
            life_expectancy,
        });
    }
    debug!(kept = observations.len(), dropped, "projected long table");
    Ok(observations)
}
