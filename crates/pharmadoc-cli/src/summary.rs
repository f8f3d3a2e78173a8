use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pharmadoc_cli::request::GenerateOutcome;

pub fn print_summary(outcome: &GenerateOutcome) {
    println!("System: {} ({})", outcome.system_name, outcome.category);
    println!("Date: {}", outcome.date.format("%Y-%m-%d"));
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("File"),
        header_cell("Bytes"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_bytes = 0usize;
    for file in &outcome.files {
        total_bytes += file.bytes;
        let location = match &file.path {
            Some(path) => Cell::new(path.display()),
            None => dim_cell(&file.file_name),
        };
        table.add_row(vec![
            Cell::new(&file.title)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            location,
            Cell::new(file.bytes),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} document(s)", outcome.files.len())),
        Cell::new(total_bytes).add_attribute(Attribute::Bold),
    ]);
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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
    Cell::new(value).fg(Color::DarkGrey)
}
