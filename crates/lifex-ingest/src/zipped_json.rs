//! Loader for a zip archive holding a single JSON document.
//!
//! Two document shapes are accepted:
//! - an array of flat objects, one object per row (keys become columns);
//! - an object mapping column names to equal-length arrays (column-major).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use lifex_model::{PipelineError, RawTable, Result};

use crate::loader::SourceReader;

/// Single-member zip archive containing one JSON document.
#[derive(Debug, Clone, Copy)]
pub struct ZippedJsonReader;

impl SourceReader for ZippedJsonReader {
    fn load(&self, path: &Path) -> Result<RawTable> {
        let file = File::open(path).map_err(|error| PipelineError::io(path, error))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|error| archive_error(path, &error))?;
        if archive.is_empty() {
            return Err(PipelineError::EmptyArchive {
                path: path.to_path_buf(),
            });
        }

        // Only the first member is read; by convention the archive holds one file.
        let mut member = archive
            .by_index(0)
            .map_err(|error| archive_error(path, &error))?;
        let mut contents = String::new();
        member
            .read_to_string(&mut contents)
            .map_err(|error| PipelineError::io(path, error))?;

        let document: Value = serde_json::from_str(&contents).map_err(|error| {
            PipelineError::Json {
                path: path.to_path_buf(),
                message: error.to_string(),
            }
        })?;
        table_from_json(path, &document)
    }
}

fn archive_error(path: &Path, error: &zip::result::ZipError) -> PipelineError {
    PipelineError::Archive {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn json_error(path: &Path, message: impl Into<String>) -> PipelineError {
    PipelineError::Json {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn table_from_json(path: &Path, document: &Value) -> Result<RawTable> {
    match document {
        Value::Array(records) => table_from_records(path, records),
        Value::Object(columns) => table_from_columns(path, columns),
        _ => Err(json_error(
            path,
            "expected an array of objects or an object of arrays at the top level",
        )),
    }
}

/// Row-major: one object per row, columns are the union of keys in the order
/// they are first seen.
fn table_from_records(path: &Path, records: &[Value]) -> Result<RawTable> {
    let mut headers: Vec<String> = Vec::new();
    for record in records {
        let Value::Object(fields) = record else {
            return Err(json_error(path, "expected every record to be an object"));
        };
        for key in fields.keys() {
            if !headers.iter().any(|header| header == key) {
                headers.push(key.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let Value::Object(fields) = record else {
            return Err(json_error(path, "expected every record to be an object"));
        };
        let row = headers
            .iter()
            .map(|header| fields.get(header).map(render_scalar).unwrap_or_default())
            .collect();
        rows.push(row);
    }
    Ok(RawTable::new(headers, rows))
}

/// Column-major: every top-level key maps to an array of cell values.
fn table_from_columns(
    path: &Path,
    columns: &serde_json::Map<String, Value>,
) -> Result<RawTable> {
    let mut headers = Vec::with_capacity(columns.len());
    let mut series: Vec<&Vec<Value>> = Vec::with_capacity(columns.len());
    let mut length = None;
    for (name, values) in columns {
        let Value::Array(values) = values else {
            return Err(json_error(path, format!("column '{name}' is not an array")));
        };
        match length {
            None => length = Some(values.len()),
            Some(expected) if expected != values.len() => {
                return Err(json_error(
                    path,
                    format!(
                        "column '{name}' has {} values, expected {expected}",
                        values.len()
                    ),
                ));
            }
            Some(_) => {}
        }
        headers.push(name.clone());
        series.push(values);
    }

    let length = length.unwrap_or(0);
    let mut rows = Vec::with_capacity(length);
    for index in 0..length {
        let row = series
            .iter()
            .map(|values| render_scalar(&values[index]))
            .collect();
        rows.push(row);
    }
    Ok(RawTable::new(headers, rows))
}

/// Renders a JSON scalar the way the rest of the pipeline expects cells:
/// null becomes the empty string, numbers keep their JSON text form.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}
