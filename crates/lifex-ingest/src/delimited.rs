//! Delimited-text loaders (tab and comma separated).

use std::path::Path;

use csv::ReaderBuilder;

use lifex_model::{PipelineError, RawTable, Result};

use crate::loader::SourceReader;

/// Tab-separated source file, first row is the header.
#[derive(Debug, Clone, Copy)]
pub struct TsvReader;

/// Comma-separated source file, first row is the header.
#[derive(Debug, Clone, Copy)]
pub struct CsvReader;

impl SourceReader for TsvReader {
    fn load(&self, path: &Path) -> Result<RawTable> {
        read_delimited(path, b'\t')
    }
}

impl SourceReader for CsvReader {
    fn load(&self, path: &Path) -> Result<RawTable> {
        read_delimited(path, b',')
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Reads a delimited file into a dense string grid. Short records are padded
/// with empty cells and long records truncated to the header width, so every
/// row has one cell per header column.
fn read_delimited(path: &Path, delimiter: u8) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, &error))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| csv_error(path, &error))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| csv_error(path, &error))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for index in 0..headers.len() {
            row.push(normalize_cell(record.get(index).unwrap_or("")));
        }
        rows.push(row);
    }

    Ok(RawTable::new(headers, rows))
}

fn csv_error(path: &Path, error: &csv::Error) -> PipelineError {
    PipelineError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn tsv_keeps_commas_inside_the_key_column() {
        let (_dir, path) = write_temp(
            "raw.tsv",
            "unit,sex,age,geo\\time\t2020\t2021\nYR,M,Y_LT1,PT\t78.5 e\t:\n",
        );
        let table = TsvReader.load(&path).unwrap();
        assert_eq!(table.headers[0], r"unit,sex,age,geo\time");
        assert_eq!(table.headers[1..], ["2020".to_string(), "2021".to_string()]);
        assert_eq!(table.rows, vec![vec!["YR,M,Y_LT1,PT", "78.5 e", ":"]]);
    }

    #[test]
    fn short_records_are_padded_to_the_header_width() {
        let (_dir, path) = write_temp("raw.csv", "unit,year\nYR,2020\nYR\n");
        let table = CsvReader.load(&path).unwrap();
        assert_eq!(table.rows[1], vec!["YR".to_string(), String::new()]);
    }

    #[test]
    fn cells_are_trimmed() {
        let (_dir, path) = write_temp("raw.tsv", "a\tb\n 1 \t 78.5 e \n");
        let table = TsvReader.load(&path).unwrap();
        assert_eq!(table.rows[0], vec!["1".to_string(), "78.5 e".to_string()]);
    }
}
