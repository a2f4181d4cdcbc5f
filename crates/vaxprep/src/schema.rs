//! Column type inference for raw string tables.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// Date patterns compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap(), // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap(), // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(), // Alt ISO
    ]
});

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Date values.
    Date,
    /// Text/string values.
    String,
    /// All values missing, nothing to infer from.
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Date => "date",
            ColumnType::String => "string",
            ColumnType::Unknown => "unknown",
        }
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Unknown
    }
}

/// Infer the type of a column from its non-null values.
///
/// Every non-null value must fit the candidate type; a single
/// non-conforming value demotes the column (integer -> float -> string),
/// matching how a dataframe library would assign a column dtype.
pub fn infer_column_type<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut seen_any = false;
    let mut all_integer = true;
    let mut all_float = true;
    let mut all_date = true;

    for value in values {
        let trimmed = value.trim();
        if DataTable::is_null_value(trimmed) {
            continue;
        }
        seen_any = true;

        if all_integer && trimmed.parse::<i64>().is_err() {
            all_integer = false;
        }
        if all_float && trimmed.parse::<f64>().is_err() {
            all_float = false;
        }
        if all_date && !DATE_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
            all_date = false;
        }

        if !all_integer && !all_float && !all_date {
            return ColumnType::String;
        }
    }

    if !seen_any {
        ColumnType::Unknown
    } else if all_integer {
        ColumnType::Integer
    } else if all_float {
        ColumnType::Float
    } else if all_date {
        ColumnType::Date
    } else {
        ColumnType::String
    }
}
