//! Membership-number normalization.
//!
//! Membership numbers pass through spreadsheet cells that may store them as
//! integers, floats or text. They are normalized to text with no float
//! artifacts, and zero or blank means unknown.

use polars::prelude::{AnyValue, DataFrame};
use regatta_common::{format_numeric, string_column};
use regatta_model::Result;
use regatta_model::columns::MEMBERSHIP_NUMBER;

use crate::frame::with_replaced;

fn strip_zero_fraction(text: &str) -> &str {
    match text.split_once('.') {
        Some((whole, fraction))
            if !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c == '0') =>
        {
            whole
        }
        _ => text,
    }
}

/// All digits, all zero: `0`, `00`, `000`.
fn is_zero(text: &str) -> bool {
    text.bytes().all(|b| b == b'0')
}

/// Normalize one membership-number cell.
///
/// Zero, in any representation, is indistinguishable from unknown and maps to
/// `None`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use regatta_transform::membership::normalize_membership_number;
///
/// assert_eq!(normalize_membership_number(AnyValue::Null), None);
/// assert_eq!(normalize_membership_number(AnyValue::Float64(5.0)), Some("5".to_string()));
/// assert_eq!(normalize_membership_number(AnyValue::Int64(0)), None);
/// assert_eq!(normalize_membership_number(AnyValue::String("A1234")), Some("A1234".to_string()));
/// ```
pub fn normalize_membership_number(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => strip_zero_fraction(s.trim()).to_string(),
        AnyValue::StringOwned(s) => strip_zero_fraction(s.trim()).to_string(),
        other => regatta_common::any_to_string(other),
    };
    if text.is_empty() || is_zero(&text) {
        None
    } else {
        Some(text)
    }
}

/// Return a copy of `members` with the membership-number column as
/// normalized text.
pub fn normalize_membership_column(members: &DataFrame) -> Result<DataFrame> {
    let column = members.column(MEMBERSHIP_NUMBER)?;
    let mut values = Vec::with_capacity(members.height());
    for idx in 0..members.height() {
        values.push(normalize_membership_number(column.get(idx)?));
    }
    with_replaced(members, string_column(MEMBERSHIP_NUMBER, values))
}

#[cfg(test)]
mod tests {
    use polars::prelude::{DataType, IntoColumn, NamedFrom, Series};
    use regatta_common::column_strings;

    use super::*;

    #[test]
    fn text_keeps_leading_characters() {
        assert_eq!(
            normalize_membership_number(AnyValue::String("0123")),
            Some("0123".to_string())
        );
        assert_eq!(
            normalize_membership_number(AnyValue::String("1234.0")),
            Some("1234".to_string())
        );
        assert_eq!(
            normalize_membership_number(AnyValue::String("0012")),
            Some("0012".to_string())
        );
        assert_eq!(
            normalize_membership_number(AnyValue::String("100")),
            Some("100".to_string())
        );
        for zero in ["0", "00", "000", "00.0", "0.00", " 000 "] {
            assert_eq!(normalize_membership_number(AnyValue::String(zero)), None, "{zero}");
        }
        assert_eq!(normalize_membership_number(AnyValue::String(" ")), None);
    }

    #[test]
    fn float_column_becomes_text() {
        let df = DataFrame::new(vec![
            Series::new(MEMBERSHIP_NUMBER.into(), vec![Some(5.0f64), None, Some(0.0)])
                .into_column(),
        ])
        .unwrap();
        let out = normalize_membership_column(&df).unwrap();
        assert_eq!(out.column(MEMBERSHIP_NUMBER).unwrap().dtype(), &DataType::String);
        assert_eq!(
            column_strings(&out, MEMBERSHIP_NUMBER).unwrap(),
            vec![Some("5".to_string()), None, None]
        );
    }
}
