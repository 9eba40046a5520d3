//! Table rendering helpers.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use statline_transform::data_utils::any_to_string;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Renders the first `limit` rows of a frame.
pub fn frame_table(df: &DataFrame, limit: usize) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>(),
    );
    let rows = df.height().min(limit);
    for row in 0..rows {
        let cells: Vec<String> = df
            .get_columns()
            .iter()
            .map(|col| any_to_string(col.get(row).unwrap_or(AnyValue::Null)))
            .collect();
        table.add_row(cells);
    }
    table
}
