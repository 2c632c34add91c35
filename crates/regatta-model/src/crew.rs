//! Crew identity.

use serde::{Deserialize, Serialize};

/// Composite key identifying one crew across the Entries and Members tables.
///
/// Field order is the report sort order after the crew id, so the derived
/// `Ord` keeps crews of one boat type and club together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CrewKey {
    pub crew_id: String,
    pub boat_type: String,
    pub club: String,
    pub crew_letter: String,
}

impl CrewKey {
    pub fn new(
        crew_id: impl Into<String>,
        boat_type: impl Into<String>,
        club: impl Into<String>,
        crew_letter: impl Into<String>,
    ) -> Self {
        Self {
            crew_id: crew_id.into(),
            boat_type: boat_type.into(),
            club: club.into(),
            crew_letter: crew_letter.into(),
        }
    }
}
