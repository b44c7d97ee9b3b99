//! Command implementations for tabrecon CLI

use std::path::{Path, PathBuf};

use log::info;

use crate::cli::{Commands, OutputFormat};
use crate::error::{Result, TabreconError};
use crate::loader;
use crate::output::{JsonFormatter, PrettyPrinter};
use crate::progress::ProgressReporter;
use crate::recon;
use crate::table::Table;
use crate::writer;

/// Execute a command
pub fn execute_command(command: Commands, format: &str, silent: bool) -> Result<()> {
    let format = OutputFormat::parse(format).map_err(TabreconError::invalid_input)?;

    match command {
        Commands::Csv {
            file1,
            file2,
            column,
            output,
        } => csv_command(&file1, &file2, &column, &output, &format, silent),
        Commands::Excel {
            file1,
            file2,
            sheet1,
            sheet2,
            column,
            output,
        } => excel_command(
            &file1, &file2, &sheet1, &sheet2, &column, &output, &format, silent,
        ),
    }
}

/// Compare two CSV files
fn csv_command(
    file1: &Path,
    file2: &Path,
    column: &str,
    output: &str,
    format: &OutputFormat,
    silent: bool,
) -> Result<()> {
    let table_a = loader::load_csv(file1)?;
    let table_b = loader::load_csv(file2)?;
    run_reconciliation(&table_a, &table_b, column, output, format, silent)
}

/// Compare two named sheets of Excel workbooks
#[allow(clippy::too_many_arguments)]
fn excel_command(
    file1: &Path,
    file2: &Path,
    sheet1: &str,
    sheet2: &str,
    column: &str,
    output: &str,
    format: &OutputFormat,
    silent: bool,
) -> Result<()> {
    let table_a = loader::load_excel(file1, sheet1)?;
    let table_b = loader::load_excel(file2, sheet2)?;
    run_reconciliation(&table_a, &table_b, column, output, format, silent)
}

/// Reconcile two loaded tables and write the result workbook
fn run_reconciliation(
    table_a: &Table,
    table_b: &Table,
    column: &str,
    output: &str,
    format: &OutputFormat,
    silent: bool,
) -> Result<()> {
    let result = recon::reconcile(table_a, table_b, column)?;

    let output_path = PathBuf::from(format!("{}.xlsx", output));
    info!("Writing comparison results to {}", output_path.display());

    let mut progress = if silent {
        ProgressReporter::new_minimal()
    } else {
        ProgressReporter::new_for_write(result.table.row_count() as u64)
    };
    writer::write_xlsx(&result.table, &output_path, &mut progress)?;

    if !silent {
        match format {
            OutputFormat::Pretty => PrettyPrinter::print_summary(&result, &output_path),
            OutputFormat::Json => {
                println!("{}", JsonFormatter::format_summary(&result, &output_path)?)
            }
        }
    }

    Ok(())
}
