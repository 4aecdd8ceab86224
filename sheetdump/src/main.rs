use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sheetdump_core::config::DEFAULT_CONFIG_FILE;
use sheetdump_core::{ColorChoice, DumpConfig, Dumper};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetdump")]
#[command(about = "Print every formula and cached value of a workbook", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the workbook (default: ../Opportuniteitskost - FIRE calculator.xlsx)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Only dump the given sheet (repeatable)
    #[arg(short = 's', long = "sheet", value_name = "SHEET")]
    sheets: Vec<String>,

    /// Skip the calculated values section
    #[arg(long)]
    no_values: bool,

    /// When to style headers
    #[arg(long, value_enum, value_name = "WHEN")]
    color: Option<ColorArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    /// Only when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;

    // Command line wins over the config file
    if let Some(file) = cli.file {
        config.workbook = file;
    }
    if !cli.sheets.is_empty() {
        config.sheets = cli.sheets;
    }
    if cli.no_values {
        config.values = false;
    }
    if let Some(color) = cli.color {
        config.color = color.into();
    }

    debug!(workbook = %config.workbook.display(), "starting dump");

    colored::control::set_override(config.color.enabled());
    let dumper = Dumper::with_config(config);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    dumper.run(&mut out).with_context(|| {
        format!(
            "Failed to dump workbook: {}",
            dumper.config().workbook.display()
        )
    })?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<DumpConfig> {
    if let Some(config_path) = explicit {
        return DumpConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()));
    }

    // Try to load default config from current directory if it exists
    let default_config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default_config_path.exists() {
        DumpConfig::from_file(&default_config_path).with_context(|| {
            format!(
                "Failed to load config from {}",
                default_config_path.display()
            )
        })
    } else {
        Ok(DumpConfig::default())
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
}
