//! sheetdump-core: print every formula and cached value of a workbook
//!
//! A run has three phases: load the workbook, dump the formula view of every
//! sheet, then dump the cached values of every sheet for cross-reference.

pub mod config;
pub mod dump;
pub mod error;
pub mod preflight;
pub mod reader;
pub mod reference;
pub mod render;

use std::io::Write;
use std::path::Path;
use tracing::debug;

pub use config::{ColorChoice, DumpConfig};
pub use dump::Style;
pub use error::{DumpError, Result};
pub use reader::{Cell, CellContent, CellValue, Sheet, Workbook, read_workbook};
pub use reference::CellReference;

/// Main dump interface
pub struct Dumper {
    config: DumpConfig,
    style: Style,
}

impl Dumper {
    /// Create a new dumper with default configuration
    pub fn new() -> Self {
        Self::with_config(DumpConfig::default())
    }

    /// Create a new dumper with custom configuration
    pub fn with_config(config: DumpConfig) -> Self {
        let style = Style::new(config.color.enabled());
        Self { config, style }
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    /// Dump the configured workbook
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        self.dump_file(&self.config.workbook, out)
    }

    /// Check, load and dump a workbook file
    pub fn dump_file<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> Result<()> {
        let path = path.as_ref();
        preflight::check(path)?;

        writeln!(out, "Loading workbook: {}", path.display())?;
        let workbook = read_workbook(path)?;

        self.dump_workbook(&workbook, out)
    }

    /// Dump an already loaded workbook
    pub fn dump_workbook<W: Write>(&self, workbook: &Workbook, out: &mut W) -> Result<()> {
        self.config.validate_sheets(workbook)?;

        writeln!(
            out,
            "Sheets found: {}",
            render::quote_list(workbook.sheet_names())
        )?;

        let selected: Vec<&Sheet> = workbook
            .sheets
            .iter()
            .filter(|s| self.config.is_sheet_selected(&s.name))
            .collect();
        debug!(selected = selected.len(), total = workbook.sheets.len(), "dumping sheets");

        dump::dump_formulas(selected.iter().copied(), self.style, out)?;
        if self.config.values {
            dump::dump_values(selected.iter().copied(), self.style, out)?;
        }

        out.flush()?;
        Ok(())
    }
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new()
    }
}
