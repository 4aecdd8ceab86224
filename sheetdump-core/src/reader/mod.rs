//! Excel file reader using calamine
//!
//! The workbook is parsed once. For every sheet both the value range and the
//! formula range are read and merged cell by cell, so each [`Cell`] carries
//! its formula-view content and its value-view cached result together.

use crate::error::{DumpError, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

pub mod workbook;

pub use workbook::{Cell, CellContent, CellValue, Sheet, Workbook};

/// Read a workbook from a file path
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    let mut excel = open_workbook_auto(path).map_err(|source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = excel.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for sheet_name in &sheet_names {
        let range = excel
            .worksheet_range(sheet_name)
            .map_err(|source| DumpError::Sheet {
                sheet: sheet_name.clone(),
                source,
            })?;
        let formula_range =
            excel
                .worksheet_formula(sheet_name)
                .map_err(|source| DumpError::Sheet {
                    sheet: sheet_name.clone(),
                    source,
                })?;

        let sheet = parse_sheet(sheet_name, &range, &formula_range);
        debug!(
            sheet = %sheet.name,
            rows = sheet.max_row(),
            cols = sheet.max_col(),
            cells = sheet.cells.len(),
            "loaded sheet"
        );

        let uncached = sheet.uncached_formulas();
        if uncached > 0 {
            debug!(sheet = %sheet.name, uncached, "formula cells without a cached value");
        }

        sheets.push(sheet);
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

fn parse_sheet(name: &str, range: &Range<Data>, formula_range: &Range<String>) -> Sheet {
    let mut sheet = Sheet::new(name);

    // Used range is the union of both ranges' end corners
    let (max_row, max_col) = match (range.end(), formula_range.end()) {
        (Some(r), Some(f)) => (r.0.max(f.0) + 1, r.1.max(f.1) + 1),
        (Some(r), None) => (r.0 + 1, r.1 + 1),
        (None, Some(f)) => (f.0 + 1, f.1 + 1),
        (None, None) => return sheet,
    };

    for row in 0..max_row {
        for col in 0..max_col {
            let value = range.get_value((row, col)).and_then(parse_cell_value);

            let formula = formula_range
                .get_value((row, col))
                .filter(|f| !f.is_empty());

            let cell = match (formula, value) {
                (Some(f), cached) => Cell::formula(f.clone(), cached),
                (None, Some(v)) => Cell::literal(v),
                (None, None) => continue,
            };
            sheet.insert(row + 1, col + 1, cell);
        }
    }

    sheet.used_range = (max_row, max_col);
    sheet
}

fn parse_cell_value(data: &Data) -> Option<CellValue> {
    let value = match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                match dt.as_duration() {
                    Some(d) => CellValue::Iso(d.to_string()),
                    None => CellValue::Number(dt.as_f64()),
                }
            } else {
                match dt.as_datetime() {
                    Some(d) => CellValue::DateTime(d),
                    None => CellValue::Number(dt.as_f64()),
                }
            }
        }
        Data::DateTimeIso(s) => CellValue::Iso(s.clone()),
        Data::DurationIso(s) => CellValue::Iso(s.clone()),
        Data::Empty => return None,
    };
    Some(value)
}
