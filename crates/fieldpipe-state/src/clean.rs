use fieldpipe_common::{CleanValue, FieldType, THOUSANDS_SEPARATOR};

/// Derive the typed submission value from a field's formatted display string.
///
/// An empty string always derives no value. Text fields pass the string
/// through unchanged. Number fields strip grouping separators and parse as
/// `f64`; strings containing no digit at all (`"-"`, `"."`, `"-."`) derive no
/// value rather than zero, so an abandoned partial entry is indistinguishable
/// from an empty field at submission time.
pub fn derive_clean_value(formatted: &str, field_type: FieldType) -> Option<CleanValue> {
    if formatted.is_empty() {
        return None;
    }
    match field_type {
        FieldType::Text => Some(CleanValue::Text(formatted.to_owned())),
        FieldType::Number => {
            let bare: String = formatted
                .chars()
                .filter(|&c| c != THOUSANDS_SEPARATOR)
                .collect();
            if !bare.chars().any(|c| c.is_ascii_digit()) {
                return None;
            }
            bare.parse::<f64>().ok().map(CleanValue::Number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_derives_nothing() {
        assert_eq!(derive_clean_value("", FieldType::Text), None);
        assert_eq!(derive_clean_value("", FieldType::Number), None);
    }

    #[test]
    fn text_passes_through() {
        assert_eq!(
            derive_clean_value("hello ", FieldType::Text),
            Some(CleanValue::Text("hello ".to_owned()))
        );
    }

    #[test]
    fn number_parses_plain_decimals() {
        assert_eq!(
            derive_clean_value("1.23", FieldType::Number),
            Some(CleanValue::Number(1.23))
        );
        assert_eq!(
            derive_clean_value("-162.23", FieldType::Number),
            Some(CleanValue::Number(-162.23))
        );
        assert_eq!(
            derive_clean_value("0", FieldType::Number),
            Some(CleanValue::Number(0.0))
        );
    }

    #[test]
    fn number_strips_grouping_separators() {
        assert_eq!(
            derive_clean_value("1,000,000", FieldType::Number),
            Some(CleanValue::Number(1_000_000.0))
        );
        assert_eq!(
            derive_clean_value("-1,000", FieldType::Number),
            Some(CleanValue::Number(-1000.0))
        );
    }

    #[test]
    fn digitless_partials_derive_nothing() {
        assert_eq!(derive_clean_value("-", FieldType::Number), None);
        assert_eq!(derive_clean_value(".", FieldType::Number), None);
        assert_eq!(derive_clean_value("-.", FieldType::Number), None);
    }

    #[test]
    fn trailing_point_still_parses() {
        assert_eq!(
            derive_clean_value("1.", FieldType::Number),
            Some(CleanValue::Number(1.0))
        );
        assert_eq!(
            derive_clean_value("-1.", FieldType::Number),
            Some(CleanValue::Number(-1.0))
        );
        assert_eq!(
            derive_clean_value(".5", FieldType::Number),
            Some(CleanValue::Number(0.5))
        );
    }
}
