use std::sync::Arc;

use fieldpipe_common::FilterError;

/// The polymorphic filter slot: a string-to-string transform run on every
/// raw-value-set event, before the value is stored.
///
/// The built-in factories ([`numeric_filter`](crate::numeric_filter),
/// [`number_filter`](crate::number_filter), [`text_filter`](crate::text_filter))
/// never return `Err` and are idempotent after one pass. Caller-supplied
/// filters carry no such guarantees.
pub type FilterFn = Arc<dyn Fn(&str) -> Result<String, FilterError> + Send + Sync>;

/// A display formatter slot: same shape as [`FilterFn`], but applied after
/// filtering to produce the display value only. Never fed back into the
/// stored raw value.
pub type FormatFn = Arc<dyn Fn(&str) -> Result<String, FilterError> + Send + Sync>;

/// Run `raw` through `filter`, or return it unchanged when no filter is
/// configured. Errors from caller-supplied filters propagate unmodified.
pub fn apply_filter(raw: &str, filter: Option<&FilterFn>) -> Result<String, FilterError> {
    match filter {
        Some(filter) => filter(raw),
        None => Ok(raw.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_without_filter() {
        assert_eq!(apply_filter("a1b2", None).unwrap(), "a1b2");
        assert_eq!(apply_filter("", None).unwrap(), "");
    }

    #[test]
    fn custom_filter_output_is_used() {
        let upper: FilterFn = Arc::new(|v| Ok(v.to_ascii_uppercase()));
        assert_eq!(apply_filter("abc", Some(&upper)).unwrap(), "ABC");
    }

    #[test]
    fn custom_filter_errors_propagate() {
        let fail: FilterFn = Arc::new(|_| Err(FilterError::new("rejected")));
        let err = apply_filter("x", Some(&fail)).unwrap_err();
        assert_eq!(err.message, "rejected");
    }
}
