//! Fixed-width text rendering of a formation snapshot.

use crate::config::DisplayConfig;
use crate::model::{FormationSnapshot, Slot};

/// Width of one weight cell, excluding its trailing space.
const CELL_WIDTH: usize = 6;

/// Render every row as `<letter>:` followed by fixed-width one-decimal
/// weight cells (vacant slots print as 0.0), padded with blank fields up to
/// the display column count, then `[total, average]`.
pub fn render_snapshot(snapshot: &FormationSnapshot, display: &DisplayConfig) -> String {
    let mut out = String::new();
    for row in snapshot.rows() {
        out.push(row.label);
        out.push(':');
        for slot in &row.slots {
            let value = match slot {
                Slot::Vacant => 0.0,
                Slot::Occupied(w) => w.to_f64(),
            };
            out.push_str(&format!("{value:>CELL_WIDTH$.1} "));
        }
        for _ in row.slots.len()..display.columns {
            out.push_str(&" ".repeat(CELL_WIDTH + 1));
        }
        out.push_str(&format!(
            "[{:>CELL_WIDTH$.1}, {:>CELL_WIDTH$.1}]",
            row.total.to_f64(),
            row.average
        ));
        out.push('\n');
    }
    out
}
