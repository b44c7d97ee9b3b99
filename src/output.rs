//! Output formatting utilities

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::recon::Reconciliation;

/// Machine-readable reconciliation summary
#[derive(Debug, Serialize)]
pub struct ReconSummary {
    pub output: String,
    pub deleted: usize,
    pub added: usize,
    pub unchanged: usize,
    pub total_rows: usize,
    pub columns: Vec<String>,
}

impl ReconSummary {
    pub fn new(result: &Reconciliation, output: &Path) -> Self {
        Self {
            output: output.display().to_string(),
            deleted: result.deleted,
            added: result.added,
            unchanged: result.unchanged,
            total_rows: result.table.row_count(),
            columns: result.table.columns.clone(),
        }
    }
}

/// Pretty printer for tabrecon output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print reconciliation summary
    pub fn print_summary(result: &Reconciliation, output: &Path) {
        println!("🔍 Reconciliation written to {}", output.display());
        println!("├─ Deleted: {}", result.deleted);
        println!("├─ Added: {}", result.added);
        println!("├─ Not Change: {}", result.unchanged);
        println!("└─ Total rows: {}", result.table.row_count());
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format a reconciliation summary as JSON
    pub fn format_summary(result: &Reconciliation, output: &Path) -> Result<String> {
        Self::format(&ReconSummary::new(result, output))
    }
}
