use std::sync::Arc;

use crate::config::NumericFilterConfig;
use crate::pipeline::FilterFn;

/// Build a filter that strips everything but ASCII digits and truncates to
/// the configured length, leftmost digits kept.
///
/// No sign, no decimal point, no numeric normalization: leading zeros are
/// preserved verbatim (`"00"` stays `"00"`).
pub fn numeric_filter(config: NumericFilterConfig) -> FilterFn {
    Arc::new(move |value| Ok(filter_numeric(value, &config)))
}

fn filter_numeric(value: &str, config: &NumericFilterConfig) -> String {
    let mut digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if let Some(cap) = config.max_length {
        digits.truncate(cap);
    }
    digits
}
