//! Run stages for the `run` command.
//!
//! 1. **Load**: read the exports and the field mapping
//! 2. **Reconcile**: build the canonical Entries and Members tables
//! 3. **Render**: derive every report view
//! 4. **Output**: write the CSV files and `summary.json`

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use regatta_common::column_strings;
use regatta_ingest::{load_field_mapping, read_report_csv};
use regatta_model::FieldMapping;
use regatta_model::columns::{COX_POSITION, CREW_ID, MEMBERSHIP_NUMBER, NAME, POSITION};
use regatta_report::{ReportView, ViewOptions, club_list, entry_stats, render_view};
use regatta_transform::{CanonicalTables, RawReports, run_pipeline};
use tracing::{debug, info, info_span, trace};

use crate::logging::redact_value;
use crate::output::{MEMBERS_FILE, SUMMARY_FILE, write_frame_csv, write_json};
use crate::types::{ReportSummary, RunOptions, RunResult, RunSummary};

/// Read the three exports and the field mapping from disk.
pub fn load_inputs(options: &RunOptions) -> Result<(RawReports, FieldMapping)> {
    let teams = read_report_csv(&options.teams).context("load teams export")?;
    let team_members = read_report_csv(&options.members).context("load team members export")?;
    let community_members = match &options.roster {
        Some(path) => Some(read_report_csv(path).context("load community members export")?),
        None => None,
    };
    let mapping = load_field_mapping(&options.mapping).context("load field mapping")?;
    debug!(
        teams = teams.height(),
        team_members = team_members.height(),
        community_members = community_members.as_ref().map(DataFrame::height),
        "exports loaded"
    );
    Ok((
        RawReports {
            teams,
            team_members,
            community_members,
        },
        mapping,
    ))
}

/// Render every view in display order.
pub fn render_reports(
    tables: &CanonicalTables,
    options: &ViewOptions,
) -> Result<Vec<(ReportView, DataFrame)>> {
    let mut reports = Vec::with_capacity(ReportView::ALL.len());
    for view in ReportView::ALL {
        let frame = render_view(view, &tables.entries, &tables.members, options)
            .with_context(|| format!("render {view}"))?;
        debug!(view = %view, rows = frame.height(), "report rendered");
        reports.push((view, frame));
    }
    Ok(reports)
}

fn trace_unmatched_coxes(members: &DataFrame) -> Result<()> {
    let positions = column_strings(members, POSITION)?;
    let numbers = column_strings(members, MEMBERSHIP_NUMBER)?;
    let names = column_strings(members, NAME)?;
    let crews = column_strings(members, CREW_ID)?;
    for idx in 0..members.height() {
        if positions[idx].as_deref() == Some(COX_POSITION) && numbers[idx].is_none() {
            trace!(
                crew_id = crews[idx].as_deref().unwrap_or_default(),
                cox = redact_value(names[idx].as_deref().unwrap_or_default()),
                "cox has no membership number"
            );
        }
    }
    Ok(())
}

/// Execute the full run.
pub fn run(options: &RunOptions) -> Result<RunResult> {
    let start = Instant::now();

    let (raw, mapping) = info_span!("load").in_scope(|| load_inputs(options))?;
    let tables = run_pipeline(&raw, &mapping).context("reconcile exports")?;
    trace_unmatched_coxes(&tables.members)?;
    if let Some(club) = options.views.club.as_deref() {
        let clubs = club_list(&tables.entries)?;
        if !clubs.iter().any(|known| known == club) {
            bail!("club '{club}' has no entries; known clubs: {}", clubs.join(", "));
        }
    }

    let stats = entry_stats(&tables.entries, &tables.members).context("compute statistics")?;
    let reports = info_span!("render").in_scope(|| render_reports(&tables, &options.views))?;

    let summary = RunSummary {
        stats,
        cox_reconciliation: tables.cox_reconciliation,
        members: tables.members.height(),
        reports: reports
            .iter()
            .map(|(view, frame)| ReportSummary {
                view: *view,
                title: view.title().to_string(),
                file_name: view.file_name(),
                rows: frame.height(),
                columns: frame.width(),
            })
            .collect(),
    };

    let written = if options.dry_run {
        info!("dry run, no files written");
        Vec::new()
    } else {
        info_span!("output", dir = %options.output_dir.display())
            .in_scope(|| write_outputs(options, &tables, &reports, &summary))?
    };

    info!(
        entries = summary.stats.entries,
        members = summary.members,
        files = written.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        output_dir: options.output_dir.clone(),
        summary,
        written,
        dry_run: options.dry_run,
    })
}

fn write_outputs(
    options: &RunOptions,
    tables: &CanonicalTables,
    reports: &[(ReportView, DataFrame)],
    summary: &RunSummary,
) -> Result<Vec<PathBuf>> {
    let dir = &options.output_dir;
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let mut written = Vec::with_capacity(reports.len() + 2);

    let members_path = dir.join(MEMBERS_FILE);
    write_frame_csv(&tables.members, &members_path)?;
    written.push(members_path);

    for (view, frame) in reports {
        let path = dir.join(view.file_name());
        write_frame_csv(frame, &path)?;
        written.push(path);
    }

    let summary_path = dir.join(SUMMARY_FILE);
    write_json(summary, &summary_path)?;
    written.push(summary_path);
    Ok(written)
}
