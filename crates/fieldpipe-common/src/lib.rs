pub mod error;
pub mod value;

pub use error::FilterError;
pub use value::{CleanValue, FieldType};

/// Decimal separator accepted and emitted by the built-in number filter.
///
/// The pipeline is intentionally locale-invariant: `.` is the only decimal
/// separator and `,` the only grouping separator. Locale-dependent inputs
/// like `"1.234,56"` are filtered character-by-character, not interpreted.
pub const DECIMAL_POINT: char = '.';

/// Grouping separator inserted by the number filter's thousands mode and
/// stripped again during clean-value derivation.
pub const THOUSANDS_SEPARATOR: char = ',';

/// Fixed cap on fractional digits kept by the number filter, independent of
/// any per-field configuration.
pub const MAX_DECIMAL_PLACES: usize = 2;
