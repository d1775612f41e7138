//! Terminal summary for a completed run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use destmap_cli::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Resolution"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("City match"),
        count_cell(result.city_matches),
    ]);
    table.add_row(vec![
        Cell::new("Airport match"),
        count_cell(result.airport_matches),
    ]);
    table.add_row(vec![
        Cell::new("Passthrough"),
        passthrough_cell(result.passthrough),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Green)
    } else {
        Cell::new(value).add_attribute(Attribute::Dim)
    }
}

fn passthrough_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Yellow)
    } else {
        Cell::new(value).add_attribute(Attribute::Dim)
    }
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
