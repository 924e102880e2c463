//! Aligned text table for a co-occurrence matrix.

use crate::engine::CooccurrenceMatrix;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Presentation options. Styling never affects column widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyle {
    pub color: bool,
}

/// Fields by descending diagonal count; ties by descending name.
pub fn ordered_fields(matrix: &CooccurrenceMatrix) -> Vec<&str> {
    let mut fields: Vec<(u32, &str)> = matrix
        .row_fields()
        .into_iter()
        .map(|field| (matrix.diagonal(field), field))
        .collect();
    fields.sort_unstable_by(|a, b| b.cmp(a));
    fields.into_iter().map(|(_, field)| field).collect()
}

/// Render `matrix` as a table: a header of field names, then one row per
/// field whose cells read `count/total`, where `total` is the row field's
/// diagonal. Zero cells are blank.
///
/// Panics if the matrix is not symmetric. [`aggregate`] never produces such a
/// matrix, so a failure here is a bug upstream.
///
/// [`aggregate`]: crate::engine::aggregate
pub fn render_table(matrix: &CooccurrenceMatrix, style: TableStyle) -> String {
    assert_eq!(
        matrix.row_fields(),
        matrix.column_fields(),
        "co-occurrence matrix rows and columns name different fields"
    );

    let ordered = ordered_fields(matrix);

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(ordered.len() + 1);
    let mut header = vec![" ".to_string()];
    header.extend(ordered.iter().map(|f| f.to_string()));
    rows.push(header);

    for &r in &ordered {
        let total = matrix.diagonal(r);
        let mut row = vec![r.to_string()];
        for &l in &ordered {
            let lr = matrix.get(l, r);
            assert_eq!(
                lr,
                matrix.get(r, l),
                "co-occurrence matrix is not symmetric at ({l}, {r})"
            );
            row.push(if lr == 0 {
                " ".to_string()
            } else {
                format!("{lr}/{total}")
            });
        }
        rows.push(row);
    }

    let widths = column_widths(&rows);
    let mut out = String::new();
    for (row_index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col_index, (cell, &width))| {
                let padded = format!("{cell:>width$}");
                let is_name = (row_index == 0) != (col_index == 0);
                if style.color && is_name {
                    format!("{BOLD}{padded}{RESET}")
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.first().map_or(0, Vec::len);
    (0..columns)
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}
