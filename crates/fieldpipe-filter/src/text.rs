use std::sync::Arc;

use crate::pipeline::FilterFn;

/// Build the default filter for text fields: strip *leading* whitespace so a
/// field can never begin with blanks, while interior and trailing whitespace
/// survive (`" a "` becomes `"a "`).
pub fn text_filter() -> FilterFn {
    Arc::new(|value| Ok(value.trim_start().to_owned()))
}
