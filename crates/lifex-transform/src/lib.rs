//! Reshape-validate-filter core of the life-expectancy pipeline.
//!
//! - **reshape**: wide detection, unpivoting, composite-key decomposition,
//!   type coercion, column projection
//! - **numeric**: the silent-drop leading-numeric-token parser
//! - **filter**: region selection over reshaped observations

pub mod filter;
pub mod numeric;
pub mod reshape;

pub use filter::filter_region;
pub use numeric::extract_leading_numeric;
pub use reshape::{reshape, split_key};
