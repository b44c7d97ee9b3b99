//! Table loading from CSV files and Excel workbooks

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::debug;

use crate::error::{Result, TabreconError};
use crate::table::{Table, Value};

/// Load a delimited text file with a header row.
///
/// Fails with `NotFound` if the path does not resolve to a file and with
/// `Parse` if the content is not a well-formed CSV table (ragged rows
/// included). Column order and row order are preserved.
pub fn load_csv(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(TabreconError::not_found(path));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| malformed_csv(path, &e))?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| malformed_csv(path, &e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = Table::new(path.display().to_string(), columns);
    for record in reader.records() {
        let record = record.map_err(|e| malformed_csv(path, &e))?;
        table
            .rows
            .push(record.iter().map(Value::from_csv_field).collect());
    }

    debug!(
        "Loaded {} rows x {} columns from {}",
        table.row_count(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

/// Load one named sheet of a spreadsheet workbook (xlsx, xls, xlsb, ods).
///
/// The sheet name is matched case-sensitively; a missing sheet or an empty
/// one (no header row) is a `Parse` error. The first row of the used range
/// is taken as the header.
pub fn load_excel(path: &Path, sheet: &str) -> Result<Table> {
    if !path.is_file() {
        return Err(TabreconError::not_found(path));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| {
        TabreconError::parse(format!(
            "Failed to open Excel file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let range = workbook.worksheet_range(sheet).map_err(|e| {
        TabreconError::parse(format!(
            "Failed to read sheet '{}' in '{}': {}",
            sheet,
            path.display(),
            e
        ))
    })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| {
        TabreconError::parse(format!(
            "Sheet '{}' in '{}' has no header row",
            sheet,
            path.display()
        ))
    })?;

    let columns: Vec<String> = header.iter().map(header_name).collect();
    let name = format!("sheet '{}' of {}", sheet, path.display());
    let mut table = Table::new(name, columns);
    for row in rows {
        table.rows.push(row.iter().map(cell_value).collect());
    }

    debug!(
        "Loaded {} rows x {} columns from sheet '{}' of {}",
        table.row_count(),
        table.columns.len(),
        sheet,
        path.display()
    );
    Ok(table)
}

fn malformed_csv(path: &Path, error: &csv::Error) -> TabreconError {
    TabreconError::parse(format!(
        "Malformed CSV file '{}': {}",
        path.display(),
        error
    ))
}

/// Map a spreadsheet cell to a typed value.
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::Text(s.clone()),
        Data::Float(f) => Value::Float(*f),
        Data::Int(i) => Value::Int(*i),
        Data::Bool(b) => Value::Bool(*b),
        // Error cells keep their text representation
        Data::Error(e) => Value::Text(format!("#{:?}", e)),
        // Serial number; 1900 date system assumed
        Data::DateTime(dt) => Value::Float(dt.as_f64()),
        Data::DateTimeIso(s) => Value::Text(s.clone()),
        Data::DurationIso(s) => Value::Text(s.clone()),
    }
}

/// Stringify a header cell. Non-text headers keep their display form.
fn header_name(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => cell_value(other).to_string(),
    }
}
