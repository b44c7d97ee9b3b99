//! In-memory table model: typed scalar values plus ordered columns and rows

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single scalar cell value.
///
/// Tables loaded from different sources may hold different types for the
/// same column name; comparison and ordering are total across all variants.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Infer a typed value from a raw CSV field.
    ///
    /// Empty fields become `Null`; integer and float literals are parsed as
    /// numbers; everything else stays text verbatim.
    pub fn from_csv_field(field: &str) -> Self {
        if field.is_empty() {
            return Self::Null;
        }
        if let Ok(i) = field.parse::<i64>() {
            return Self::Int(i);
        }
        if let Ok(f) = field.parse::<f64>() {
            return Self::Float(f);
        }
        Self::Text(field.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Cross-type ordering rank: nulls first, then booleans, numbers, text.
    fn type_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Text(_) => 3,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Total order across heterogeneous values.
    ///
    /// `Int` and `Float` compare numerically, so a key `1` matches a key
    /// `1.0`. `-0.0` equals `0.0`. NaN is ordered after every other number
    /// and equal to itself.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => normalize_zero(a).total_cmp(&normalize_zero(b)),
                _ => self.type_rank().cmp(&other.type_rank()),
            },
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_rank().hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            // Both numeric variants hash through f64 so Int(1) and
            // Float(1.0) land in the same bucket as they compare equal.
            Self::Int(i) => normalize_zero(*i as f64).to_bits().hash(state),
            Self::Float(f) => normalize_zero(*f).to_bits().hash(state),
            Self::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

fn normalize_zero(f: f64) -> f64 {
    if f == 0.0 {
        0.0
    } else {
        f
    }
}

/// An in-memory table: an ordered column list plus rows aligned to it.
///
/// Loaded once by the loader and immutable afterwards. Duplicate key values
/// across rows are legal; duplicate column names are tolerated, with the
/// first occurrence winning lookups.
#[derive(Debug, Clone)]
pub struct Table {
    /// Label used in user-facing messages (file path, or "sheet 'S' of path").
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Index of the first column with this exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
