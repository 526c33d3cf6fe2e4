//! Registry processing logic.
//!
//! - [`filter`] - CSV parsing, MA-L selection and vendor renaming
//! - [`coverage`] - Filters that matched nothing

mod coverage;
mod filter;

// Re-export public functions
pub use coverage::unmatched_filters;
pub use filter::{filter_rows, parse_registry_rows, FilterOutcome};
