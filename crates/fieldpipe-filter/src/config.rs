#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`numeric_filter`](crate::numeric_filter): digits-only
/// input with an optional length cap.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericFilterConfig {
    /// Maximum number of digits kept; `None` means unbounded.
    pub max_length: Option<usize>,
}

impl NumericFilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Configuration for [`number_filter`](crate::number_filter): signed,
/// optionally fractional numbers under construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFilterConfig {
    /// Admit a decimal point. When `false` the output reduces to sign +
    /// digits and leading zeros strip entirely.
    pub decimal: bool,
    /// Admit a single leading minus sign.
    pub negative: bool,
    /// Cap on the entire output string, sign and point included.
    pub max_length: Option<usize>,
    /// Cap on the digits left of the decimal point, sign excluded.
    pub max_length_before_decimal: Option<usize>,
    /// Regroup the integer digits with a `,` every three digits.
    pub split_thousands: bool,
}

impl Default for NumberFilterConfig {
    fn default() -> Self {
        Self {
            decimal: true,
            negative: true,
            max_length: None,
            max_length_before_decimal: None,
            split_thousands: false,
        }
    }
}

impl NumberFilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_decimal(mut self) -> Self {
        self.decimal = false;
        self
    }

    pub fn without_negative(mut self) -> Self {
        self.negative = false;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_max_length_before_decimal(mut self, max_length: usize) -> Self {
        self.max_length_before_decimal = Some(max_length);
        self
    }

    pub fn with_split_thousands(mut self) -> Self {
        self.split_thousands = true;
        self
    }
}
