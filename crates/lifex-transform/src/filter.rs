//! Region selection over reshaped observations.

use lifex_model::{Observation, Region};

/// Returns the observations for `region`, or a copy of the whole input when
/// no region is requested. The input is never mutated; the result is a fresh
/// sequence indexed from zero. Matching is an exact string comparison
/// against the region code.
pub fn filter_region(rows: &[Observation], region: Option<Region>) -> Vec<Observation> {
    match region {
        None => rows.to_vec(),
        Some(region) => rows
            .iter()
            .filter(|row| row.region == region.as_str())
            .cloned()
            .collect(),
    }
}
