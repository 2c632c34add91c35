//! Seat positions within a crew.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use regatta_common::{column_strings, string_column};
use regatta_model::Result;
use regatta_model::columns::{CREW_ID, POSITION};

use crate::frame::with_replaced;

/// Assign 1-based positions per crew id, in row order.
///
/// Positions are strings so they can share a column with the cox sentinel.
/// The result depends only on crew ids and their order; rows are never
/// sorted, so the seat order the export encoded is preserved.
///
/// # Examples
///
/// ```
/// use regatta_transform::position::assign_positions;
///
/// let crews = vec![Some("a".to_string()), Some("b".to_string()), Some("a".to_string())];
/// assert_eq!(assign_positions(&crews), vec!["1", "1", "2"]);
/// ```
pub fn assign_positions(crew_ids: &[Option<String>]) -> Vec<String> {
    let mut counters: HashMap<Option<&str>, usize> = HashMap::new();
    crew_ids
        .iter()
        .map(|crew| {
            let counter = counters.entry(crew.as_deref()).or_insert(0);
            *counter += 1;
            counter.to_string()
        })
        .collect()
}

/// Return a copy of `members` with a `position` column.
pub fn with_positions(members: &DataFrame) -> Result<DataFrame> {
    let crew_ids = column_strings(members, CREW_ID)?;
    let positions = assign_positions(&crew_ids).into_iter().map(Some).collect();
    with_replaced(members, string_column(POSITION, positions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_crews_count_independently() {
        let crews: Vec<Option<String>> = ["x", "y", "x", "x", "y"]
            .iter()
            .map(|c| Some((*c).to_string()))
            .collect();
        assert_eq!(assign_positions(&crews), vec!["1", "1", "2", "3", "2"]);
    }

    #[test]
    fn adds_position_column() {
        let df = DataFrame::new(vec![string_column(
            CREW_ID,
            vec![Some("1".to_string()), Some("1".to_string())],
        )])
        .unwrap();
        let out = with_positions(&df).unwrap();
        assert_eq!(
            column_strings(&out, POSITION).unwrap(),
            vec![Some("1".to_string()), Some("2".to_string())]
        );
    }
}
