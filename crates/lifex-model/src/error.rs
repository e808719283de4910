#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: {extension}. Supported extensions are: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to read archive {path}: {message}")]
    Archive { path: PathBuf, message: String },

    #[error("archive {path} contains no files")]
    EmptyArchive { path: PathBuf },

    #[error("failed to parse JSON {path}: {message}")]
    Json { path: PathBuf, message: String },

    #[error(
        "missing required columns: {}. Available columns: {}",
        missing.join(", "),
        available.join(", ")
    )]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("malformed composite key '{key}': expected 4 comma-separated fields, found {found}")]
    MalformedKey { key: String, found: usize },

    #[error("invalid year label '{label}': expected a non-negative integer")]
    InvalidYear { label: String },

    #[error("'{code}' is not a valid region. Valid regions are: {valid}")]
    InvalidRegion { code: String, valid: String },
}

impl PipelineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
