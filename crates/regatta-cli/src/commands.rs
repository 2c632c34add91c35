use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use regatta_cli::pipeline::run;
use regatta_cli::types::{RunOptions, RunResult};
use regatta_report::{ReportView, ViewOptions};
use tracing::info_span;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_views() {
    let mut table = Table::new();
    table.set_header(vec!["View", "File", "Description"]);
    apply_table_style(&mut table);
    for view in ReportView::ALL {
        table.add_row(vec![
            view.title().to_string(),
            view.file_name(),
            view.description().to_string(),
        ]);
    }
    println!("{table}");
}

pub fn run_reports(args: &RunArgs) -> Result<RunResult> {
    let options = RunOptions {
        teams: args.teams.clone(),
        members: args.members.clone(),
        roster: args.roster.clone(),
        mapping: args.mapping.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("reports")),
        dry_run: args.dry_run,
        views: ViewOptions {
            entries_filter: args.entries.into(),
            crew_cell: args.crew_cell.into(),
            rower_sort: args.sort_rowers.into(),
            club: args.club.clone(),
        },
    };
    let span = info_span!("run", teams = %options.teams.display(), dry_run = options.dry_run);
    let _guard = span.enter();
    run(&options)
}
