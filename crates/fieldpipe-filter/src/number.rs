use std::sync::Arc;

use smallvec::SmallVec;

use fieldpipe_common::{DECIMAL_POINT, MAX_DECIMAL_PLACES, THOUSANDS_SEPARATOR};

use crate::config::NumberFilterConfig;
use crate::pipeline::FilterFn;

/// Build a filter for a signed decimal number *under construction*.
///
/// The filter runs on every keystroke, so it must return the longest valid
/// prefix consistent with policy rather than reject partial input: `"."`,
/// `"-"`, `"1."`, `"-.1"` are all valid intermediate display states. It never
/// fails, and applying it twice to its own output yields the same output.
pub fn number_filter(config: NumberFilterConfig) -> FilterFn {
    Arc::new(move |value| Ok(filter_number(value, &config)))
}

/// The transforms below run in a fixed order. Leading-zero collapse must see
/// the uncapped integer, the fraction cap must see the length-capped string,
/// and grouping runs last; reordering changes observable edge cases.
fn filter_number(value: &str, config: &NumberFilterConfig) -> String {
    let admitted = admit_chars(value, config);
    let (negative, body) = split_sign(&admitted);
    let (mut integer, fraction) = split_point(&body);

    collapse_leading_zeros(&mut integer, config.decimal);
    if let Some(cap) = config.max_length_before_decimal {
        integer.truncate(cap);
    }

    let mut out = assemble(negative, &integer, fraction.as_deref());
    if let Some(cap) = config.max_length {
        out.truncate(cap);
    }
    cap_fraction(&mut out);

    if config.split_thousands {
        regroup_thousands(&out)
    } else {
        out
    }
}

/// Keep digits, plus `-` and `.` when policy admits them. Everything else
/// (including a previous pass's grouping separators) is dropped.
fn admit_chars(value: &str, config: &NumberFilterConfig) -> String {
    value
        .chars()
        .filter(|&c| {
            c.is_ascii_digit()
                || (config.negative && c == '-')
                || (config.decimal && c == DECIMAL_POINT)
        })
        .collect()
}

/// At most one *leading* minus survives; interior minus signs are removed,
/// not collapsed.
fn split_sign(admitted: &str) -> (bool, String) {
    let negative = admitted.starts_with('-');
    let body = admitted.chars().filter(|&c| c != '-').collect();
    (negative, body)
}

/// Split at the first decimal point. Later points are dropped from the
/// fraction. `None` fraction means no point was typed (or `decimal` is off,
/// in which case admission already removed every point).
fn split_point(body: &str) -> (String, Option<String>) {
    match body.find(DECIMAL_POINT) {
        Some(idx) => {
            let fraction = body[idx + 1..]
                .chars()
                .filter(|&c| c != DECIMAL_POINT)
                .collect();
            (body[..idx].to_owned(), Some(fraction))
        }
        None => (body.to_owned(), None),
    }
}

/// Decimal mode keeps one significant leading zero (`"00"` -> `"0"`) so the
/// user can continue typing `"0."`. Integer mode strips leading zeros
/// entirely, a lone `"0"` included.
fn collapse_leading_zeros(integer: &mut String, decimal: bool) {
    if decimal && integer.len() <= 1 {
        return;
    }
    let significant = integer.trim_start_matches('0');
    if significant.len() != integer.len() {
        let collapsed = if decimal && significant.is_empty() {
            "0"
        } else {
            significant
        };
        *integer = collapsed.to_owned();
    }
}

fn assemble(negative: bool, integer: &str, fraction: Option<&str>) -> String {
    let mut out = String::with_capacity(integer.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(integer);
    if let Some(fraction) = fraction {
        out.push(DECIMAL_POINT);
        out.push_str(fraction);
    }
    out
}

/// Fraction is capped at [`MAX_DECIMAL_PLACES`] digits whenever a point is
/// present, independent of per-field configuration.
fn cap_fraction(out: &mut String) {
    if let Some(idx) = out.find(DECIMAL_POINT) {
        out.truncate(idx + 1 + MAX_DECIMAL_PLACES);
    }
}

/// Regroup the integer digits with a separator every three digits from the
/// right. The sign is excluded from grouping and reinserted in front; the
/// point and fraction pass through untouched. Purely a display transform:
/// the next pass's admission step strips the separators again.
fn regroup_thousands(out: &str) -> String {
    let (sign, body) = match out.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", out),
    };
    let (integer, tail) = match body.find(DECIMAL_POINT) {
        Some(idx) => (&body[..idx], &body[idx..]),
        None => (body, ""),
    };
    if integer.len() <= 3 {
        return out.to_owned();
    }

    let mut groups: SmallVec<[&str; 4]> = SmallVec::new();
    let head = integer.len() % 3;
    if head > 0 {
        groups.push(&integer[..head]);
    }
    let mut start = head;
    while start < integer.len() {
        groups.push(&integer[start..start + 3]);
        start += 3;
    }

    let mut grouped = String::with_capacity(out.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push_str(group);
    }
    grouped.push_str(tail);
    grouped
}
