//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while checking, loading or dumping a workbook
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Workbook not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Unsupported workbook format '{extension}' for {} (expected .xlsx or .xlsm)", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to open workbook: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}'")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Configuration error: Unknown sheet '{sheet}' in sheets")]
    UnknownSheet { sheet: String },

    #[error("Failed to read config file: {}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DumpError>;
