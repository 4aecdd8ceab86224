//! Configuration for dump runs

use crate::error::{DumpError, Result};
use crate::reader::Workbook;
use serde::Deserialize;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Workbook dumped when nothing else is configured, relative to the working directory
pub const DEFAULT_WORKBOOK: &str = "../Opportuniteitskost - FIRE calculator.xlsx";

/// File name looked up in the working directory when no config is given
pub const DEFAULT_CONFIG_FILE: &str = "sheetdump.toml";

/// Main dump configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DumpConfig {
    /// Workbook to dump
    #[serde(default = "default_workbook")]
    pub workbook: PathBuf,
    /// Sheets to dump (empty means all)
    #[serde(default)]
    pub sheets: Vec<String>,
    /// Whether to print the calculated values section
    #[serde(default = "default_true")]
    pub values: bool,
    #[serde(default)]
    pub color: ColorChoice,
}

fn default_workbook() -> PathBuf {
    PathBuf::from(DEFAULT_WORKBOOK)
}

fn default_true() -> bool {
    true
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            sheets: Vec::new(),
            values: true,
            color: ColorChoice::default(),
        }
    }
}

impl DumpConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DumpError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DumpError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check if a sheet is selected for dumping
    pub fn is_sheet_selected(&self, name: &str) -> bool {
        self.sheets.is_empty() || self.sheets.iter().any(|s| s == name)
    }

    /// Validate the sheet selection against a loaded workbook
    pub fn validate_sheets(&self, workbook: &Workbook) -> Result<()> {
        for sheet in &self.sheets {
            if workbook.get_sheet(sheet).is_none() {
                return Err(DumpError::UnknownSheet {
                    sheet: sheet.clone(),
                });
            }
        }
        Ok(())
    }
}

/// When to style headers with ANSI colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => std::io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
