use thiserror::Error;

use fieldpipe_common::FilterError;

/// Failure surfaced while recomputing a field's value states.
///
/// The two variants distinguish which stage of the pipeline rejected the
/// input, so callers can decide whether the raw value or only its display
/// form is at fault.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("filter failed: {0}")]
    Filter(FilterError),

    #[error("formatter failed: {0}")]
    Formatter(FilterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let filter = FieldError::Filter(FilterError::new("bad char"));
        let formatter = FieldError::Formatter(FilterError::new("bad char"));
        assert!(filter.to_string().starts_with("filter failed"));
        assert!(formatter.to_string().starts_with("formatter failed"));
        assert_ne!(filter, formatter);
    }
}
