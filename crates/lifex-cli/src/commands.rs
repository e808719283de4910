//! Subcommand implementations and the result table.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use lifex_cli::pipeline::{CleanSummary, run_pipeline};
use lifex_model::Region;

use crate::cli::{CleanArgs, RegionsArgs};

pub fn run_clean(args: &CleanArgs) -> Result<CleanSummary> {
    run_pipeline(&args.input, args.region, args.output_dir.as_deref())
}

pub fn print_summary(summary: &CleanSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    let mut table = Table::new();
    table.set_header(vec!["Region", "Raw rows", "Observations", "Kept"]);
    apply_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.region),
        Cell::new(summary.rows_loaded),
        Cell::new(summary.rows_reshaped),
        Cell::new(summary.rows_kept),
    ]);
    println!("{table}");
}

pub fn run_regions(args: &RegionsArgs) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Classification"]);
    apply_table_style(&mut table);
    if args.countries_only {
        for region in Region::countries() {
            table.add_row(vec![region.as_str(), "country"]);
        }
    } else {
        for region in Region::ALL {
            let classification = if region.is_country() {
                "country"
            } else {
                "aggregate"
            };
            table.add_row(vec![region.as_str(), classification]);
        }
    }
    println!("{table}");
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
