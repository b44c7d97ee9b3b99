//! Result workbook writing

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::table::{Table, Value};

/// Write a table as a single-sheet xlsx workbook.
///
/// The header row is the table's column list; data rows follow in order,
/// with no positional index column. Null cells are left empty. Progress
/// reporting is advisory and never affects the written content.
pub fn write_xlsx(table: &Table, path: &Path, progress: &mut ProgressReporter) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = (idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col_num = col as u16;
            match value {
                Value::Null => {}
                Value::Bool(b) => {
                    worksheet.write_boolean(row_num, col_num, *b)?;
                }
                Value::Int(i) => {
                    worksheet.write_number(row_num, col_num, *i as f64)?;
                }
                Value::Float(f) => {
                    worksheet.write_number(row_num, col_num, *f)?;
                }
                Value::Text(s) => {
                    worksheet.write_string(row_num, col_num, s)?;
                }
            }
        }
        progress.update_rows((idx + 1) as u64);
    }

    workbook.save(path)?;
    progress.finish_rows("Workbook written");
    Ok(())
}
