pub mod delimited;
pub mod loader;
pub mod zipped_json;

pub use delimited::{CsvReader, TsvReader};
pub use loader::{SourceReader, load_table, reader_for, supported_extensions};
pub use zipped_json::ZippedJsonReader;
