//! Formula pass: every reportable cell as stored, grouped by row

use super::Style;
use crate::reader::{Cell, CellContent, Sheet};
use crate::reference::CellReference;
use crate::render;
use std::io::{self, Write};
use tracing::debug;

/// Print the formula pass for each sheet, in the given order
pub fn dump_formulas<'a, W, I>(sheets: I, style: Style, out: &mut W) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Sheet>,
{
    for sheet in sheets {
        dump_sheet(sheet, style, out)?;
    }
    Ok(())
}

fn dump_sheet<W: Write>(sheet: &Sheet, style: Style, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    let title = format!("{} {}", style.title("SHEET:"), style.sheet_name(&sheet.name));
    style.banner(out, &title)?;
    writeln!(
        out,
        "Dimensions: {} rows x {} columns\n",
        sheet.max_row(),
        sheet.max_col()
    )?;

    let rows = formula_rows(sheet);
    debug!(sheet = %sheet.name, rows = rows.len(), "formula pass");

    for (row, items) in rows {
        writeln!(out, "Row {}:", row)?;
        for item in items {
            writeln!(out, "  {}", item)?;
        }
    }
    Ok(())
}

/// Reportable lines of each row, in row-major order. Rows with nothing to report are left out.
pub fn formula_rows(sheet: &Sheet) -> Vec<(u32, Vec<String>)> {
    let mut rows = Vec::new();

    for row in 1..=sheet.max_row() {
        let row_data: Vec<String> = (1..=sheet.max_col())
            .filter_map(|col| {
                describe(sheet.cell(row, col))
                    .map(|text| format!("{}: {}", CellReference::new(row, col), text))
            })
            .collect();

        if !row_data.is_empty() {
            rows.push((row, row_data));
        }
    }

    rows
}

/// Formula-view description of one cell, `None` when absent.
///
/// Absence is decided on the content variant alone, so numeric zero and
/// empty text are always reported.
fn describe(cell: &Cell) -> Option<String> {
    if let Some(formula) = cell.content.formula_text() {
        return Some(format!("FORMULA: {}", formula));
    }
    match &cell.content {
        CellContent::Literal(value) => Some(render::repr(value)),
        _ => None,
    }
}
