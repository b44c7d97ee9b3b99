//! # tabrecon
//!
//! A key-based reconciliation tool for tabular snapshots: compares two CSV
//! files or Excel sheets on a chosen key column and classifies every row as
//! Deleted, Added, or Not Change in one unified output workbook.

pub mod cli;
pub mod commands;
pub mod error;
pub mod loader;
pub mod output;
pub mod progress;
pub mod recon;
pub mod table;
pub mod writer;

pub use error::{Result, TabreconError};
pub use recon::{reconcile, ChangeTag, Reconciliation};
pub use table::{Table, Value};

/// Name of the classification column appended to reconciliation output
pub const CHANGES_COLUMN: &str = "changes";
