//! Regatta entry data model.
//!
//! Canonical column names, the field-mapping configuration, boat-type codes,
//! crew keys and the pipeline error taxonomy shared by every crate.

pub mod boat;
pub mod columns;
pub mod crew;
pub mod error;
pub mod mapping;
pub mod summary;

pub use boat::BoatClass;
pub use crew::CrewKey;
pub use error::{ErrorKind, PipelineError, Result};
pub use mapping::{ColumnMapping, FieldMapping, MappingError, ReportKind, ReportMapping};
pub use summary::{CoxReconciliation, EntryStats, SeatCounts};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        let schema = PipelineError::BlankRequired {
            report: "teams".to_string(),
            column: "crew id".to_string(),
            count: 2,
        };
        assert_eq!(schema.kind(), ErrorKind::Schema);
        assert_eq!(
            schema.to_string(),
            "teams report column 'crew id' is blank in 2 row(s)"
        );

        let value = PipelineError::InvalidFlag {
            column: "cox".to_string(),
            row: 0,
            value: "maybe".to_string(),
        };
        assert_eq!(value.kind(), ErrorKind::Value);
    }

    #[test]
    fn stats_serialize() {
        let stats = EntryStats {
            entries: 3,
            seats: SeatCounts {
                total: 14,
                filled: 12,
            },
            unique_rowers: 11,
        };
        let json = serde_json::to_string(&stats).expect("serialize stats");
        let round: EntryStats = serde_json::from_str(&json).expect("deserialize stats");
        assert_eq!(round, stats);
        assert_eq!(round.seats.empty_seats(), 2);
    }
}
