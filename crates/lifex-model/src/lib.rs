pub mod error;
pub mod observation;
pub mod region;
pub mod table;

pub use error::{PipelineError, Result};
pub use observation::{Observation, REQUIRED_COLUMNS};
pub use region::Region;
pub use table::{RawTable, WIDE_KEY_COLUMN};
