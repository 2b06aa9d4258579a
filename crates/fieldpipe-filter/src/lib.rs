pub mod config;
pub mod number;
pub mod numeric;
pub mod pipeline;
pub mod text;

pub use config::{NumberFilterConfig, NumericFilterConfig};
pub use number::number_filter;
pub use numeric::numeric_filter;
pub use pipeline::{FilterFn, FormatFn, apply_filter};
pub use text::text_filter;

// Re-export common types
pub use fieldpipe_common::{DECIMAL_POINT, FilterError, MAX_DECIMAL_PLACES, THOUSANDS_SEPARATOR};
