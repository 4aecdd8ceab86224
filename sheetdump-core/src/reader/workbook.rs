//! Workbook data structures

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Represents a complete workbook
#[derive(Debug, Clone)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names, in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Represents a worksheet
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    /// Cells keyed by 1-based (row, col)
    pub cells: BTreeMap<(u32, u32), Cell>,
    /// Used range as (max_row, max_col), 1-based. (0, 0) for an empty sheet.
    pub used_range: (u32, u32),
}

static ABSENT: Cell = Cell {
    content: CellContent::Absent,
    cached: None,
};

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            used_range: (0, 0),
        }
    }

    pub fn max_row(&self) -> u32 {
        self.used_range.0
    }

    pub fn max_col(&self) -> u32 {
        self.used_range.1
    }

    /// Get a cell at the given 1-based position
    pub fn get_cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Like [`Sheet::get_cell`], but positions without data yield an absent cell
    pub fn cell(&self, row: u32, col: u32) -> &Cell {
        self.get_cell(row, col).unwrap_or(&ABSENT)
    }

    /// Insert a cell, growing the used range to cover it
    pub fn insert(&mut self, row: u32, col: u32, cell: Cell) {
        self.used_range = (self.used_range.0.max(row), self.used_range.1.max(col));
        self.cells.insert((row, col), cell);
    }

    /// Formula cells whose cached value is missing
    pub fn uncached_formulas(&self) -> usize {
        self.cells
            .values()
            .filter(|c| c.content.is_formula() && c.cached.is_none())
            .count()
    }
}

/// A single cell: what the formula view holds plus the value view's cached result
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: CellContent,
    /// Last value cached by the application that computed the sheet.
    /// For literal cells this is the literal itself.
    pub cached: Option<CellValue>,
}

impl Cell {
    pub fn formula(text: impl Into<String>, cached: Option<CellValue>) -> Self {
        Self {
            content: CellContent::Formula(text.into()),
            cached,
        }
    }

    pub fn literal(value: CellValue) -> Self {
        Self {
            content: CellContent::Literal(value.clone()),
            cached: Some(value),
        }
    }
}

/// Formula-view content of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Absent,
    /// Formula text without the leading '='
    Formula(String),
    Literal(CellValue),
}

impl CellContent {
    pub fn is_absent(&self) -> bool {
        matches!(self, CellContent::Absent)
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, CellContent::Formula(_))
    }

    /// The formula text including its leading '=', if this content reads as a formula.
    ///
    /// Literal text that starts with '=' counts as a formula too.
    pub fn formula_text(&self) -> Option<String> {
        match self {
            CellContent::Formula(f) if f.starts_with('=') => Some(f.clone()),
            CellContent::Formula(f) => Some(format!("={}", f)),
            CellContent::Literal(CellValue::Text(s)) if s.starts_with('=') => Some(s.clone()),
            _ => None,
        }
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Boolean(bool),
    DateTime(NaiveDateTime),
    /// ISO 8601 date, time or duration text kept as stored
    Iso(String),
    /// Error code such as "#DIV/0!"
    Error(String),
}
