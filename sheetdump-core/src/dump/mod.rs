//! Text dumps of a loaded workbook
//!
//! The formula pass prints every sheet's cells as stored (formula text or a
//! type-revealing literal). The value pass follows it with one compact line
//! per row of cached results for cross-reference.

use colored::Colorize;
use std::io::{self, Write};

pub mod formulas;
pub mod values;

pub use formulas::dump_formulas;
pub use values::dump_values;

const RULE_WIDTH: usize = 60;

/// Header styling shared by both passes
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn sheet_name(&self, name: &str) -> String {
        if self.color {
            name.cyan().bold().to_string()
        } else {
            name.to_string()
        }
    }

    /// Already styled title framed by two full-width rules
    fn banner<W: Write>(&self, out: &mut W, title: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{}", rule)?;
        writeln!(out, "{}", title)?;
        writeln!(out, "{}", rule)
    }
}
