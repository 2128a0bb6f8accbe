use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::types::ConvertSummary;

/// Shared table styling for CLI output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn print_summary(summary: &ConvertSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Conversion"), header_cell("Result")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(summary.input.display()),
    ]);
    table.add_row(vec![
        Cell::new("Rows rendered"),
        Cell::new(summary.rows),
    ]);
    table.add_row(vec![
        Cell::new("Mapped entries"),
        Cell::new(summary.entries),
    ]);
    table.add_row(vec![
        Cell::new("vCard version"),
        Cell::new(summary.version),
    ]);
    let output = if summary.written {
        summary.output.display().to_string()
    } else {
        format!("{} (dry run, not written)", summary.output.display())
    };
    table.add_row(vec![Cell::new("Output"), Cell::new(output)]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
