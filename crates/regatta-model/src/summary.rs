//! Headline numbers produced by a pipeline run.

use serde::{Deserialize, Serialize};

/// Seats across all entries.
///
/// `filled` and `total` diverge when crews are under- or over-filled; both
/// are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCounts {
    /// Seats implied by the boat-type codes.
    pub total: i64,
    /// Sum of the declared seat counts.
    pub filled: i64,
}

impl SeatCounts {
    pub fn empty_seats(self) -> i64 {
        self.total - self.filled
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryStats {
    pub entries: usize,
    pub seats: SeatCounts,
    pub unique_rowers: usize,
}

/// Outcome of matching coxswains against the roster.
///
/// Misses and ambiguous names are caveats, not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoxReconciliation {
    pub coxes: usize,
    pub matched: usize,
    pub unmatched: usize,
    /// Matched names that occur more than once in the roster.
    pub ambiguous: usize,
}
