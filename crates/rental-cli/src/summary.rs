use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rental_model::{Variable, VariableKind};
use rental_transform::{DashboardView, FrequencyTable, MapOutcome, Notice};

/// Chart drawn for each kind of variable.
pub fn chart_name(kind: VariableKind) -> &'static str {
    match kind {
        VariableKind::Numeric => "strip plot",
        VariableKind::Categorical => "top-5 bar charts",
        VariableKind::Score => "density curves",
        VariableKind::Binary => "pie charts",
        VariableKind::Price => "price tiers + map",
    }
}

/// One line per kind listing its variables in selector order.
pub fn variable_listing() -> String {
    VariableKind::ALL
        .iter()
        .map(|kind| {
            let names: Vec<&str> = kind.members().iter().map(|v| v.column()).collect();
            format!("{kind}: {}", names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn variables_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Category"),
        header_cell("Chart"),
    ]);
    apply_table_style(&mut table);
    for variable in Variable::all() {
        let kind = variable.kind();
        table.add_row(vec![
            Cell::new(variable.column()).fg(Color::Blue),
            Cell::new(kind),
            dim_cell(chart_name(kind)),
        ]);
    }
    table
}

/// Value and count columns, missing values shown as `NaN`.
pub fn frequency_table(frequencies: &FrequencyTable) -> Table {
    let mut table = Table::new();
    let [value_header, count_header] = frequencies.headers();
    table.set_header(vec![header_cell(value_header), header_cell(count_header)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in &frequencies.rows {
        let value = match row.value {
            Some(_) => Cell::new(row.label()),
            None => dim_cell(row.label()),
        };
        table.add_row(vec![value, Cell::new(row.count)]);
    }
    table
}

pub fn outputs_table(written: &[PathBuf]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Output")]);
    apply_summary_table_style(&mut table);
    for path in written {
        table.add_row(vec![Cell::new(path.display()).fg(Color::Green)]);
    }
    table
}

pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        println!("notice: {notice}");
    }
}

/// Prints everything one interaction produced.
pub fn print_view(view: &DashboardView, written: &[PathBuf]) {
    println!("Variable: {} ({})", view.variable, view.kind);
    print_notices(&view.notices);
    if let Some(MapOutcome::Rendered(map)) = &view.map {
        println!(
            "Map: {} listings in {}, {} MXN",
            map.points.len(),
            map.city,
            map.range
        );
    }
    if let Some(frequencies) = &view.table {
        println!("Frequencies of {} in {}", frequencies.variable, frequencies.city);
        println!("{}", frequency_table(frequencies));
        println!("Total: {}", frequencies.total());
    }
    println!("{}", outputs_table(written));
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
