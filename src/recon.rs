//! Key-based reconciliation of two tables
//!
//! Partitions the rows of two tables into Deleted / Added / Not Change
//! buckets on a single key column and produces one unified table whose
//! schema is the union of both inputs plus a trailing `changes` column.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexSet;

use crate::error::{Result, TabreconError};
use crate::table::{Table, Value};
use crate::CHANGES_COLUMN;

/// Classification assigned to each row of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeTag {
    Deleted,
    Added,
    Unchanged,
}

impl ChangeTag {
    /// The literal written into the `changes` column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deleted => "Deleted",
            Self::Added => "Added",
            Self::Unchanged => "Not Change",
        }
    }
}

impl fmt::Display for ChangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a reconciliation run: the unified table plus bucket counts.
#[derive(Debug)]
pub struct Reconciliation {
    pub table: Table,
    pub deleted: usize,
    pub added: usize,
    pub unchanged: usize,
}

/// Reconcile two tables on `key_column`.
///
/// Both key columns are validated up front; no row is touched if either is
/// missing. Every input row lands in the result exactly once, except that a
/// matched row is emitted only from `table_a` (tagged `Not Change`) — the
/// `table_b` copy is intentionally dropped.
pub fn reconcile(table_a: &Table, table_b: &Table, key_column: &str) -> Result<Reconciliation> {
    let key_a = table_a
        .column_index(key_column)
        .ok_or_else(|| TabreconError::missing_column(&table_a.name, key_column))?;
    let key_b = table_b
        .column_index(key_column)
        .ok_or_else(|| TabreconError::missing_column(&table_b.name, key_column))?;

    // Sort each side by its key before partitioning so every bucket comes
    // out in key order. The sort is stable: duplicate keys keep their
    // original relative order.
    let rows_a = sorted_by_key(&table_a.rows, key_a);
    let rows_b = sorted_by_key(&table_b.rows, key_b);

    // Membership is a set test, not a multiset one: duplicate key values
    // collapse here, but every row carrying the value is still emitted.
    let keys_a: HashSet<&Value> = rows_a.iter().map(|row| &row[key_a]).collect();
    let keys_b: HashSet<&Value> = rows_b.iter().map(|row| &row[key_b]).collect();

    // Union schema: the first table's columns in order, then whatever the
    // second table adds, then the classification column.
    let mut union: IndexSet<&str> = table_a.columns.iter().map(String::as_str).collect();
    for column in &table_b.columns {
        union.insert(column.as_str());
    }

    let map_a = projection_map(&union, table_a);
    let map_b = projection_map(&union, table_b);

    let mut columns: Vec<String> = union.iter().map(|c| c.to_string()).collect();
    columns.push(CHANGES_COLUMN.to_string());
    let mut result = Table::new("reconciliation", columns);

    let mut deleted = 0;
    let mut added = 0;
    let mut unchanged = 0;

    for &row in &rows_a {
        if !keys_b.contains(&row[key_a]) {
            result.rows.push(project(row, &map_a, ChangeTag::Deleted));
            deleted += 1;
        }
    }
    for &row in &rows_b {
        if !keys_a.contains(&row[key_b]) {
            result.rows.push(project(row, &map_b, ChangeTag::Added));
            added += 1;
        }
    }
    for &row in &rows_a {
        if keys_b.contains(&row[key_a]) {
            result.rows.push(project(row, &map_a, ChangeTag::Unchanged));
            unchanged += 1;
        }
    }

    Ok(Reconciliation {
        table: result,
        deleted,
        added,
        unchanged,
    })
}

/// Borrowed view of the rows, stably sorted ascending on the key column.
fn sorted_by_key(rows: &[Vec<Value>], key: usize) -> Vec<&Vec<Value>> {
    let mut sorted: Vec<&Vec<Value>> = rows.iter().collect();
    sorted.sort_by(|a, b| a[key].total_cmp(&b[key]));
    sorted
}

/// For each union column, the source column index in `table` (if present).
fn projection_map(union: &IndexSet<&str>, table: &Table) -> Vec<Option<usize>> {
    union
        .iter()
        .map(|column| table.column_index(column))
        .collect()
}

/// Project a source row onto the union schema, filling absent columns with
/// nulls and appending the classification tag.
fn project(row: &[Value], map: &[Option<usize>], tag: ChangeTag) -> Vec<Value> {
    let mut out = Vec::with_capacity(map.len() + 1);
    for source in map {
        match source {
            Some(idx) => out.push(row[*idx].clone()),
            None => out.push(Value::Null),
        }
    }
    out.push(Value::Text(tag.label().to_string()));
    out
}
