use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use regatta_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    print_headline_table(result);
    print_report_table(result);
}

fn print_headline_table(result: &RunResult) {
    let stats = result.summary.stats;
    let cox = result.summary.cox_reconciliation;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Entries"), Cell::new(stats.entries)]);
    table.add_row(vec![Cell::new("Seats (boat types)"), Cell::new(stats.seats.total)]);
    table.add_row(vec![Cell::new("Seats (declared)"), Cell::new(stats.seats.filled)]);
    table.add_row(vec![
        Cell::new("Empty seats"),
        signed_cell(stats.seats.empty_seats()),
    ]);
    table.add_row(vec![Cell::new("Unique rowers"), Cell::new(stats.unique_rowers)]);
    table.add_row(vec![Cell::new("Members rows"), Cell::new(result.summary.members)]);
    table.add_row(vec![Cell::new("Coxes"), Cell::new(cox.coxes)]);
    table.add_row(vec![Cell::new("Coxes matched"), Cell::new(cox.matched)]);
    table.add_row(vec![
        Cell::new("Coxes unmatched"),
        count_cell(cox.unmatched, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Ambiguous cox names"),
        count_cell(cox.ambiguous, Color::Yellow),
    ]);
    println!("{table}");
}

fn print_report_table(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Report"),
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for report in &result.summary.reports {
        let file = if result.dry_run {
            dim_cell("-")
        } else {
            Cell::new(&report.file_name)
        };
        table.add_row(vec![
            Cell::new(report.view.title()).add_attribute(Attribute::Bold),
            file,
            Cell::new(report.rows),
            Cell::new(report.columns),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string())
        .fg(Color::DarkGrey)
        .add_attribute(Attribute::Dim)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

/// Negative empty-seat counts mean over-filled crews.
fn signed_cell(value: i64) -> Cell {
    if value < 0 {
        Cell::new(value).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value)
    }
}
