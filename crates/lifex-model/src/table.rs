#![deny(unsafe_code)]

/// Header of the composite key column in the wide Eurostat extract.
/// The backslash is literal: four comma-joined categorical fields plus the
/// `geo\time` marker Eurostat uses for the pivot axis.
pub const WIDE_KEY_COLUMN: &str = r"unit,sex,age,geo\time";

/// A raw table as loaded from disk: a header row plus string cells.
///
/// Wide inputs carry [`WIDE_KEY_COLUMN`] plus one column per year; cells hold
/// possibly-annotated numeric text (`"78.5 e"`) or a missing-data placeholder
/// (`":"`). Cells are trimmed but otherwise verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Whether the table is still in wide (one-column-per-year) shape.
    pub fn is_wide(&self) -> bool {
        self.column_index(WIDE_KEY_COLUMN).is_some()
    }
}
