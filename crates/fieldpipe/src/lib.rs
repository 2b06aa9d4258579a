//! Meta crate that re-exports the primary fieldpipe building blocks with
//! sensible defaults. Downstream users can depend on this crate and opt into
//! specific layers via feature flags while keeping access to the underlying
//! crates when deeper integration is required.

#[cfg(feature = "common")]
pub use fieldpipe_common as common;

#[cfg(feature = "filter")]
pub use fieldpipe_filter as filter;

#[cfg(feature = "state")]
pub use fieldpipe_state as state;

#[cfg(feature = "common")]
pub use fieldpipe_common::{CleanValue, FieldType, FilterError};

#[cfg(feature = "filter")]
pub use fieldpipe_filter::{
    FilterFn, FormatFn, NumberFilterConfig, NumericFilterConfig, number_filter, numeric_filter,
    text_filter,
};

#[cfg(feature = "state")]
pub use fieldpipe_state::{FieldError, FieldPipeline, FieldValue, derive_clean_value};
