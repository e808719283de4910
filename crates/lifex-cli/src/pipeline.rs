//! The clean pipeline with explicit stages.
//!
//! 1. **Load**: read the raw table via the suffix-dispatched loader
//! 2. **Reshape**: unpivot/validate into typed observations
//! 3. **Filter**: select the requested region
//! 4. **Persist**: write `<region>_life_expectancy.csv`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lifex_ingest::load_table;
use lifex_model::Region;
use lifex_output::write_region_csv;
use lifex_transform::{filter_region, reshape};

/// Counts and paths from one pipeline run, for the CLI summary.
#[derive(Debug)]
pub struct CleanSummary {
    pub region: Region,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Rows in the raw table as loaded.
    pub rows_loaded: usize,
    /// Observations after reshaping (parse failures already dropped).
    pub rows_reshaped: usize,
    /// Observations written for the requested region.
    pub rows_kept: usize,
}

/// Runs load → reshape → filter → persist for one region.
///
/// When `output_dir` is not given, the output lands next to the input file.
pub fn run_pipeline(
    input: &Path,
    region: Region,
    output_dir: Option<&Path>,
) -> Result<CleanSummary> {
    let span = info_span!("clean", region = %region);
    let _guard = span.enter();

    let output_dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
    };

    let table = load_table(input).context("load raw table")?;
    let rows_loaded = table.rows.len();
    info!(input = %input.display(), rows = rows_loaded, "loaded input");

    let observations = reshape(&table).context("reshape raw table")?;
    let kept = filter_region(&observations, Some(region));
    info!(
        reshaped = observations.len(),
        kept = kept.len(),
        "reshaped and filtered"
    );

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let output = write_region_csv(&output_dir, &kept, region).context("write cleaned csv")?;

    Ok(CleanSummary {
        region,
        input: input.to_path_buf(),
        output,
        rows_loaded,
        rows_reshaped: observations.len(),
        rows_kept: kept.len(),
    })
}
