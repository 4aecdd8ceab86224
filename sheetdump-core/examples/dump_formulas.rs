use anyhow::Result;
use sheetdump_core::reader::{CellContent, read_workbook};
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <file.xlsx> [sheet_name]", args[0]);
        std::process::exit(1);
    }
    let target_sheet = args.get(2).map(|s| s.as_str());
    let workbook = read_workbook(&args[1])?;

    for sheet in &workbook.sheets {
        if target_sheet.is_some_and(|t| t != sheet.name) {
            continue;
        }
        println!("Sheet: {} ({}x{})", sheet.name, sheet.max_row(), sheet.max_col());
        for ((row, col), cell) in &sheet.cells {
            match &cell.content {
                CellContent::Formula(f) => {
                    println!("  ({}, {}) [FORMULA]: {} => {:?}", row, col, f, cell.cached)
                }
                CellContent::Literal(v) => println!("  ({}, {}) [LITERAL]: {:?}", row, col, v),
                CellContent::Absent => println!("  ({}, {}) [ABSENT]", row, col),
            }
        }
    }
    Ok(())
}
