use std::cmp::Ordering;

/// Order nullable text with blanks after every value.
pub(crate) fn cmp_nulls_last(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_sort_last() {
        let mut values = vec![None, Some("b".to_string()), Some("a".to_string())];
        values.sort_by(cmp_nulls_last);
        assert_eq!(values, vec![Some("a".to_string()), Some("b".to_string()), None]);
    }
}
