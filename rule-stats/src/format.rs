//! Text formatting helpers for the printed report

use crate::table::Table;
use comfy_table::{presets::NOTHING, CellAlignment, ContentArrangement};

/// Longest cell shown in the sample-row table before truncation
const MAX_CELL_WIDTH: usize = 50;

/// Format an integer with comma thousands separators (`1234567` → `1,234,567`)
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a fraction as `0.667 (66.7%)`
pub fn rate(value: f64) -> String {
    format!("{:.3} ({:.1}%)", value, value * 100.0)
}

/// Format a (rows, columns) pair as `(3, 4)`
pub fn shape((rows, cols): (usize, usize)) -> String {
    format!("({}, {})", rows, cols)
}

/// Quote a string the way Python's `repr` does for plain text
fn quoted(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        format!("\"{}\"", s.replace('\\', "\\\\"))
    } else {
        format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// Format names as a bracketed list: `['rule', 'body']`
pub fn name_list<S: AsRef<str>>(names: &[S]) -> String {
    let items: Vec<String> = names.iter().map(|n| quoted(n.as_ref())).collect();
    format!("[{}]", items.join(", "))
}

/// Single-line, width-limited rendering of one cell
fn cell_text(cell: &str) -> String {
    let flat = cell.replace('\r', "\\r").replace('\n', "\\n");
    if flat.chars().count() > MAX_CELL_WIDTH {
        let kept: String = flat.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{}...", kept)
    } else {
        flat
    }
}

/// Render rows as a borderless, right-aligned text table with a leading
/// row index
pub fn sample_table(table: &Table) -> String {
    let mut out = comfy_table::Table::new();
    out.load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);

    let mut header = vec![String::new()];
    header.extend(table.column_names().iter().cloned());
    out.set_header(header);

    for (index, row) in table.rows().iter().enumerate() {
        let mut cells = vec![index.to_string()];
        cells.extend(row.iter().map(cell_text));
        out.add_row(cells);
    }

    for column in out.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }

    out.trim_fmt()
}
