use std::path::PathBuf;

use regatta_model::{CoxReconciliation, EntryStats};
use regatta_report::{ReportView, ViewOptions};
use serde::Serialize;

/// Inputs of one `run` invocation.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub teams: PathBuf,
    pub members: PathBuf,
    pub roster: Option<PathBuf>,
    pub mapping: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub views: ViewOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    #[serde(skip)]
    pub view: ReportView,
    pub title: String,
    pub file_name: String,
    pub rows: usize,
    pub columns: usize,
}

/// Contents of `summary.json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub stats: EntryStats,
    pub cox_reconciliation: CoxReconciliation,
    pub members: usize,
    pub reports: Vec<ReportSummary>,
}

#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub summary: RunSummary,
    /// Files written, empty on a dry run.
    pub written: Vec<PathBuf>,
    pub dry_run: bool,
}
