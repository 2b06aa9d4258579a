//! Per-field value pipeline: raw input through filter, formatter, and clean
//! value derivation in one pass.

pub mod clean;
pub mod error;
pub mod field;

pub use clean::derive_clean_value;
pub use error::FieldError;
pub use field::{FieldPipeline, FieldValue};

// Re-export for convenience
pub use fieldpipe_common::{CleanValue, FieldType};
pub use fieldpipe_filter::{FilterFn, FormatFn};
