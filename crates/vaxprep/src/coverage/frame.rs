//! Typed record representation of a coverage dataset.

use crate::error::Result;
use crate::input::DataTable;

use super::{columns, validate_columns, REQUIRED_COLUMNS};

/// A YEAR cell after coercion.
///
/// The cleaning pipeline needs to distinguish a null cell (dropped by the
/// essential-field filter) from a non-numeric one (coerced to null and
/// dropped by the year range filter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YearValue {
    /// The cell was null.
    Missing,
    /// The cell held a non-numeric value; coerces to null.
    Invalid,
    /// A parsed numeric year.
    Value(f64),
}

impl YearValue {
    fn parse(cell: &str) -> Self {
        let trimmed = cell.trim();
        if DataTable::is_null_value(trimmed) {
            YearValue::Missing
        } else {
            match trimmed.parse::<f64>() {
                Ok(y) if y.is_finite() => YearValue::Value(y),
                _ => YearValue::Invalid,
            }
        }
    }

    /// The numeric year, if one parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            YearValue::Value(y) => Some(*y),
            _ => None,
        }
    }
}

/// One row of a coverage dataset with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRecord {
    pub code: Option<String>,
    pub name: Option<String>,
    pub year: YearValue,
    pub antigen: Option<String>,
    pub target_number: Option<f64>,
    pub doses: Option<f64>,
    pub coverage: Option<f64>,
}

impl CoverageRecord {
    /// True if every essential field (CODE, NAME, YEAR, ANTIGEN) is non-null.
    pub fn has_essential_fields(&self) -> bool {
        self.code.is_some()
            && self.name.is_some()
            && self.antigen.is_some()
            && self.year != YearValue::Missing
    }
}

/// A coverage dataset lifted out of a raw [`DataTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageFrame {
    /// Records in source order.
    pub records: Vec<CoverageRecord>,
}

impl CoverageFrame {
    /// Convert a raw table into typed records.
    ///
    /// Fails with `MissingColumn` if any required column is absent.
    /// Numeric cells that fail to parse coerce to null; negative values
    /// are preserved for the non-negativity filter.
    pub fn from_table(table: &DataTable) -> Result<Self> {
        validate_columns(table)?;

        // Presence checked above.
        let idx = |name: &str| table.column_index(name).unwrap();
        let code_idx = idx(columns::CODE);
        let name_idx = idx(columns::NAME);
        let year_idx = idx(columns::YEAR);
        let antigen_idx = idx(columns::ANTIGEN);
        let target_idx = idx(columns::TARGET_NUMBER);
        let doses_idx = idx(columns::DOSES);
        let coverage_idx = idx(columns::COVERAGE);

        let records = table
            .rows
            .iter()
            .map(|row| {
                let cell = |i: usize| row.get(i).map(|s| s.as_str()).unwrap_or("");
                CoverageRecord {
                    code: parse_text(cell(code_idx)),
                    name: parse_text(cell(name_idx)),
                    year: YearValue::parse(cell(year_idx)),
                    antigen: parse_text(cell(antigen_idx)),
                    target_number: parse_numeric(cell(target_idx)),
                    doses: parse_numeric(cell(doses_idx)),
                    coverage: parse_numeric(cell(coverage_idx)),
                }
            })
            .collect();

        Ok(Self { records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the frame holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the frame back into a table with the canonical column order.
    pub fn to_table(&self) -> DataTable {
        let headers = REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect();
        let rows = self
            .records
            .iter()
            .map(|r| {
                vec![
                    r.code.clone().unwrap_or_default(),
                    r.name.clone().unwrap_or_default(),
                    r.year.as_f64().map(format_number).unwrap_or_default(),
                    r.antigen.clone().unwrap_or_default(),
                    r.target_number.map(format_number).unwrap_or_default(),
                    r.doses.map(format_number).unwrap_or_default(),
                    r.coverage.map(format_number).unwrap_or_default(),
                ]
            })
            .collect();
        DataTable::new(headers, rows)
    }
}

fn parse_text(cell: &str) -> Option<String> {
    if DataTable::is_null_value(cell) {
        None
    } else {
        Some(cell.to_string())
    }
}

fn parse_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if DataTable::is_null_value(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render integral values without a fractional part so a cleaned table
/// round-trips stably through CSV.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
