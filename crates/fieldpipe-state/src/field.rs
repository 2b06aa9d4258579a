use std::fmt;

use fieldpipe_common::{CleanValue, FieldType};
use fieldpipe_filter::{FilterFn, FormatFn, apply_filter, text_filter};

use crate::clean::derive_clean_value;
use crate::error::FieldError;

/// The three value states of a single field after one recompute pass.
///
/// `raw_value` is the filtered input (what the field stores), `formatted_value`
/// is what the widget displays, and `clean_value` is the typed value a
/// submission would carry. The three always come from the same pass; there is
/// no way to observe a half-updated field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub raw_value: String,
    pub formatted_value: String,
    pub clean_value: Option<CleanValue>,
}

/// Per-field transformation pipeline: filter on input, format for display,
/// derive the typed submission value.
///
/// Text fields install the leading-whitespace filter unless a custom filter
/// replaces it; number fields install nothing and rely on the caller to
/// attach one of the numeric filters.
pub struct FieldPipeline {
    field_type: FieldType,
    filter: Option<FilterFn>,
    formatter: Option<FormatFn>,
}

impl FieldPipeline {
    pub fn new(field_type: FieldType) -> Self {
        let filter = match field_type {
            FieldType::Text => Some(text_filter()),
            FieldType::Number => None,
        };
        Self {
            field_type,
            filter,
            formatter: None,
        }
    }

    /// Replace the filter stage. Passing a filter to a text field overrides
    /// the default whitespace filter entirely.
    pub fn with_filter(mut self, filter: FilterFn) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_formatter(mut self, formatter: FormatFn) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Run one raw input through the full pipeline.
    ///
    /// The filter produces the stored raw value, the formatter (or identity)
    /// produces the display value, and the clean value is derived from the
    /// display value so that whatever the user sees is what parses.
    pub fn set_value(&self, raw: &str) -> Result<FieldValue, FieldError> {
        let raw_value = apply_filter(raw, self.filter.as_ref()).map_err(FieldError::Filter)?;

        let formatted_value = match &self.formatter {
            Some(formatter) => formatter(&raw_value).map_err(FieldError::Formatter)?,
            None => raw_value.clone(),
        };

        let clean_value = derive_clean_value(&formatted_value, self.field_type);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            field_type = %self.field_type,
            raw = %raw_value,
            formatted = %formatted_value,
            "field value recomputed"
        );

        Ok(FieldValue {
            raw_value,
            formatted_value,
            clean_value,
        })
    }
}

impl fmt::Debug for FieldPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPipeline")
            .field("field_type", &self.field_type)
            .field("filter", &self.filter.is_some())
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fieldpipe_common::FilterError;

    use super::*;

    #[test]
    fn text_field_gets_default_whitespace_filter() {
        let pipeline = FieldPipeline::new(FieldType::Text);
        let value = pipeline.set_value("  hello ").unwrap();
        assert_eq!(value.raw_value, "hello ");
        assert_eq!(value.formatted_value, "hello ");
        assert_eq!(value.clean_value, Some(CleanValue::Text("hello ".into())));
    }

    #[test]
    fn number_field_has_no_default_filter() {
        let pipeline = FieldPipeline::new(FieldType::Number);
        let value = pipeline.set_value("12x").unwrap();
        assert_eq!(value.raw_value, "12x");
    }

    #[test]
    fn formatter_defaults_to_identity() {
        let pipeline = FieldPipeline::new(FieldType::Text);
        let value = pipeline.set_value("abc").unwrap();
        assert_eq!(value.raw_value, value.formatted_value);
    }

    #[test]
    fn formatter_output_feeds_clean_derivation() {
        let pipeline = FieldPipeline::new(FieldType::Number)
            .with_formatter(Arc::new(|value| Ok(format!("{value}00"))));
        let value = pipeline.set_value("5").unwrap();
        assert_eq!(value.raw_value, "5");
        assert_eq!(value.formatted_value, "500");
        assert_eq!(value.clean_value, Some(CleanValue::Number(500.0)));
    }

    #[test]
    fn filter_errors_are_tagged_with_their_stage() {
        let pipeline = FieldPipeline::new(FieldType::Text)
            .with_filter(Arc::new(|_| Err(FilterError::new("rejected"))));
        assert_eq!(
            pipeline.set_value("anything").unwrap_err(),
            FieldError::Filter(FilterError::new("rejected"))
        );

        let pipeline = FieldPipeline::new(FieldType::Text)
            .with_formatter(Arc::new(|_| Err(FilterError::new("rejected"))));
        assert_eq!(
            pipeline.set_value("anything").unwrap_err(),
            FieldError::Formatter(FilterError::new("rejected"))
        );
    }

    #[test]
    fn debug_shows_slot_occupancy_not_closures() {
        let pipeline = FieldPipeline::new(FieldType::Text);
        let rendered = format!("{pipeline:?}");
        assert!(rendered.contains("filter: true"));
        assert!(rendered.contains("formatter: false"));
    }
}
