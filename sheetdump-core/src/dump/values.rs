//! Value pass: cached results, one bracketed line per row

use super::Style;
use crate::reader::Sheet;
use crate::reference::CellReference;
use crate::render;
use std::io::{self, Write};
use tracing::debug;

/// Print the calculated values section for each sheet, in the given order
pub fn dump_values<'a, W, I>(sheets: I, style: Style, out: &mut W) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Sheet>,
{
    writeln!(out, "\n")?;
    style.banner(out, &style.title("CALCULATED VALUES (for reference)"))?;

    for sheet in sheets {
        writeln!(out, "\n--- {} ---", style.sheet_name(&sheet.name))?;

        let rows = value_rows(sheet);
        debug!(sheet = %sheet.name, rows = rows.len(), "value pass");

        for (_, entries) in rows {
            writeln!(out, "  {}", render::quote_list(&entries))?;
        }
    }
    Ok(())
}

/// `label=value` entries of each row holding at least one cached value
pub fn value_rows(sheet: &Sheet) -> Vec<(u32, Vec<String>)> {
    let mut rows = Vec::new();

    for row in 1..=sheet.max_row() {
        let entries: Vec<String> = (1..=sheet.max_col())
            .filter_map(|col| {
                sheet.cell(row, col).cached.as_ref().map(|value| {
                    format!(
                        "{}={}",
                        CellReference::new(row, col),
                        render::display(value)
                    )
                })
            })
            .collect();

        if !entries.is_empty() {
            rows.push((row, entries));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{Cell, CellValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rows_use_cached_values() {
        let mut sheet = Sheet::new("Sheet1");
        sheet.insert(1, 1, Cell::literal(CellValue::Text("Label".into())));
        sheet.insert(
            1,
            2,
            Cell::formula("A1&\"!\"", Some(CellValue::Text("Label!".into()))),
        );
        sheet.insert(2, 2, Cell::literal(CellValue::Number(0.0)));

        assert_eq!(
            value_rows(&sheet),
            vec![
                (1, vec!["A1=Label".to_string(), "B1=Label!".to_string()]),
                (2, vec!["B2=0".to_string()]),
            ]
        );
    }

    #[test]
    fn test_uncached_formula_is_absent() {
        let mut sheet = Sheet::new("Stale");
        sheet.insert(1, 1, Cell::formula("SUM(B1:B3)", None));
        sheet.insert(2, 1, Cell::literal(CellValue::Number(1.25)));

        assert_eq!(value_rows(&sheet), vec![(2, vec!["A2=1.25".to_string()])]);
    }

    #[test]
    fn test_section_output() {
        let mut first = Sheet::new("Invoer");
        first.insert(1, 1, Cell::literal(CellValue::Boolean(true)));
        let second = Sheet::new("Leeg");

        let mut out = Vec::new();
        dump_values([&first, &second], Style::default(), &mut out).unwrap();

        let expected = [
            "",
            "",
            "============================================================",
            "CALCULATED VALUES (for reference)",
            "============================================================",
            "",
            "--- Invoer ---",
            "  ['A1=true']",
            "",
            "--- Leeg ---",
            "",
        ]
        .join("\n");
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
