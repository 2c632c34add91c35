//! End-to-end reconciliation with explicit stages.
//!
//! 1. **Prepare**: normalize each raw export into its canonical table
//! 2. **Reconcile**: synthesize cox records and append them to Members
//!
//! Each stage runs inside its own span and returns typed tables.

use std::time::Instant;

use polars::prelude::DataFrame;
use regatta_model::{
    CoxReconciliation, FieldMapping, PipelineError, ReportKind, ReportMapping, Result,
};
use tracing::{debug, info, info_span};

use crate::cox::reconcile_coxes;
use crate::prepare::{prepare_entries, prepare_members, prepare_roster};

/// Raw exports as loaded from disk.
#[derive(Debug, Clone)]
pub struct RawReports {
    pub teams: DataFrame,
    pub team_members: DataFrame,
    /// Optional community roster used to fill in cox details.
    pub community_members: Option<DataFrame>,
}

/// Output of a pipeline run.
#[derive(Debug, Clone)]
pub struct CanonicalTables {
    /// One row per crew.
    pub entries: DataFrame,
    /// Rowers in seat order, followed by one record per cox.
    pub members: DataFrame,
    pub cox_reconciliation: CoxReconciliation,
}

fn mapping_for(mapping: &FieldMapping, kind: ReportKind) -> Result<&ReportMapping> {
    mapping
        .report(kind)
        .ok_or_else(|| PipelineError::MissingMapping {
            report: kind.label().to_string(),
        })
}

/// Run the reconciliation pipeline over the raw exports.
///
/// # Errors
///
/// Fails on the first schema, parse or value error in any export. A
/// community members export without a matching mapping is a schema error.
pub fn run_pipeline(reports: &RawReports, mapping: &FieldMapping) -> Result<CanonicalTables> {
    let start = Instant::now();

    let (entries, members, roster) = info_span!("prepare").in_scope(|| -> Result<_> {
        let entries = prepare_entries(
            &reports.teams,
            mapping_for(mapping, ReportKind::Teams)?,
        )?;
        let members = prepare_members(
            &reports.team_members,
            mapping_for(mapping, ReportKind::TeamMembers)?,
        )?;
        let roster = match &reports.community_members {
            Some(raw) => Some(prepare_roster(
                raw,
                mapping_for(mapping, ReportKind::CommunityMembers)?,
            )?),
            None => None,
        };
        debug!(
            entries = entries.height(),
            members = members.height(),
            roster = roster.as_ref().map(DataFrame::height),
            "prepare complete"
        );
        Ok((entries, members, roster))
    })?;

    let (members, cox_reconciliation) = info_span!("reconcile")
        .in_scope(|| reconcile_coxes(&entries, &members, roster.as_ref()))?;

    info!(
        entries = entries.height(),
        members = members.height(),
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(CanonicalTables {
        entries,
        members,
        cox_reconciliation,
    })
}
