//! Command-line interface definitions and argument parsing

use crate::menu::SessionPaths;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Terminal customer registry backed by a CSV file
///
/// All flags are optional; running without arguments uses
/// `customer_data.csv` and `gender_distribution.png` in the current directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the customer CSV file (default when run without arguments)
    #[arg(short, long, default_value = "customer_data.csv")]
    pub data: PathBuf,

    /// Output path for the gender distribution chart (default when run without arguments)
    #[arg(short, long, default_value = "gender_distribution.png")]
    pub chart: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Log level implied by the flags; `RUST_LOG` still takes precedence
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    pub fn session_paths(&self) -> SessionPaths {
        SessionPaths {
            data: self.data.clone(),
            chart: self.chart.clone(),
        }
    }
}
