//! CSV persistence for cleaned observations.
//!
//! Output files are named `<region-code-lowercased>_life_expectancy.csv` and
//! carry the six observation fields as the header row, no index column.

use std::path::{Path, PathBuf};

use tracing::info;

use lifex_model::{Observation, PipelineError, REQUIRED_COLUMNS, Region, Result};

/// File name for a region's cleaned output.
pub fn output_file_name(region: Region) -> String {
    format!("{}_life_expectancy.csv", region.as_str().to_lowercase())
}

/// Writes `rows` as a comma-separated file under `dir`, keyed by `region`.
/// Returns the path written.
pub fn write_region_csv(dir: &Path, rows: &[Observation], region: Region) -> Result<PathBuf> {
    let path = dir.join(output_file_name(region));
    // The header is written up front so a fully filtered-out region still
    // produces a well-formed six-column file.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(|error| csv_error(&path, &error))?;
    writer
        .write_record(REQUIRED_COLUMNS)
        .map_err(|error| csv_error(&path, &error))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|error| csv_error(&path, &error))?;
    }
    writer
        .flush()
        .map_err(|error| PipelineError::io(&path, error))?;
    info!(path = %path.display(), rows = rows.len(), "wrote cleaned observations");
    Ok(path)
}

fn csv_error(path: &Path, error: &csv::Error) -> PipelineError {
    PipelineError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
