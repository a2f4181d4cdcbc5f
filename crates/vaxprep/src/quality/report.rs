//! Quality report types and console rendering.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::schema::ColumnType;

/// Per-column quality profile.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Inferred data type.
    pub column_type: ColumnType,
    /// Count of null/missing cells.
    pub missing_count: usize,
    /// Percentage of null/missing cells (0-100).
    pub missing_pct: f64,
    /// Number of distinct non-null values.
    pub unique_count: usize,
}

/// Aggregate quality scores, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QualityScores {
    /// Aggregate non-missingness across columns.
    pub completeness: f64,
    /// Absence of fully duplicate rows.
    pub uniqueness: f64,
    /// Mean of completeness and uniqueness.
    pub overall: f64,
}

/// Structured result of a quality assessment.
///
/// Ephemeral: built fresh per invocation, never persisted by the library.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    /// Label used for reporting only.
    pub dataset_name: String,
    /// Number of data rows.
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// Per-column profiles, in column order.
    pub columns: IndexMap<String, ColumnProfile>,
    /// Count of fully duplicate rows (every occurrence after the first).
    pub duplicate_rows: usize,
    /// Derived quality scores.
    pub scores: QualityScores,
    /// When the assessment ran.
    pub generated_at: DateTime<Utc>,
}

impl QualityReport {
    /// Columns that have at least one missing value.
    pub fn columns_with_missing(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.values().filter(|c| c.missing_count > 0)
    }
}

impl fmt::Display for QualityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(
            f,
            "DATA QUALITY ASSESSMENT: {}",
            self.dataset_name.to_uppercase()
        )?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(
            f,
            "Dataset Shape: ({} rows, {} columns)",
            self.row_count, self.column_count
        )?;

        writeln!(f, "\nMISSING VALUES ANALYSIS:")?;
        writeln!(f, "{}", "-".repeat(30))?;
        let mut any_missing = false;
        for profile in self.columns_with_missing() {
            any_missing = true;
            writeln!(
                f,
                "{}: {} ({:.2}%)",
                profile.name, profile.missing_count, profile.missing_pct
            )?;
        }
        if !any_missing {
            writeln!(f, "(no missing values)")?;
        }

        writeln!(f, "\nDATA TYPES AND UNIQUE VALUES:")?;
        writeln!(f, "{}", "-".repeat(35))?;
        for profile in self.columns.values() {
            writeln!(
                f,
                "{}: {} - {} unique values",
                profile.name,
                profile.column_type.label(),
                profile.unique_count
            )?;
        }

        writeln!(f, "\nDuplicate Records: {}", self.duplicate_rows)?;

        writeln!(f, "\nQUALITY SCORES:")?;
        writeln!(f, "Completeness: {:.2}%", self.scores.completeness)?;
        writeln!(f, "Uniqueness: {:.2}%", self.scores.uniqueness)?;
        writeln!(f, "Overall Quality: {:.2}%", self.scores.overall)?;

        Ok(())
    }
}
