#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Output column names, in the order they appear in cleaned files.
/// Must stay in sync with the field order of [`Observation`]: the CSV writer
/// derives its header row from the struct.
pub const REQUIRED_COLUMNS: [&str; 6] =
    ["unit", "sex", "age", "region", "year", "life_expectancy"];

/// One long-format observation: a single (unit, sex, age, region, year)
/// combination with a parsed life-expectancy value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i32,
    pub life_expectancy: f64,
}
