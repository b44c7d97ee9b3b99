//! Command-line interface for tabrecon

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tabrecon")]
#[command(about = "Compare two tabular snapshots on a key column")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress log and progress output
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// Summary format: "pretty", "json"
    #[arg(long, global = true, default_value = "pretty")]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two delimited text files
    Csv {
        /// Baseline file (the old snapshot)
        file1: PathBuf,

        /// Comparison file (the new snapshot)
        file2: PathBuf,

        /// Key column to compare on (case-sensitive)
        #[arg(short, long)]
        column: String,

        /// Output base name; ".xlsx" is appended
        #[arg(short, long)]
        output: String,
    },

    /// Compare two named sheets of Excel workbooks
    Excel {
        /// Baseline workbook (the old snapshot)
        file1: PathBuf,

        /// Comparison workbook (the new snapshot)
        file2: PathBuf,

        /// Sheet name in file1 (case-sensitive)
        #[arg(long)]
        sheet1: String,

        /// Sheet name in file2 (case-sensitive)
        #[arg(long)]
        sheet2: String,

        /// Key column to compare on (case-sensitive)
        #[arg(short, long)]
        column: String,

        /// Output base name; ".xlsx" is appended
        #[arg(short, long)]
        output: String,
    },
}

/// Parse output format string
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}
