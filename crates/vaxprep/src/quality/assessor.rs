//! Missingness, duplication, and score computation.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use indexmap::IndexMap;

use super::report::{ColumnProfile, QualityReport, QualityScores};
use crate::input::DataTable;
use crate::schema::infer_column_type;

/// Assesses the quality of a raw table.
///
/// Works on any table shape: no schema is assumed, absent or odd columns
/// are simply profiled as-is. Never fails.
#[derive(Debug, Default)]
pub struct QualityAssessor;

impl QualityAssessor {
    /// Create a new assessor.
    pub fn new() -> Self {
        Self
    }

    /// Assess a table, labeling the report with `dataset_name`.
    pub fn assess(&self, table: &DataTable, dataset_name: &str) -> QualityReport {
        let row_count = table.row_count();
        let mut columns = IndexMap::with_capacity(table.column_count());

        for (idx, name) in table.headers.iter().enumerate() {
            columns.insert(name.clone(), self.profile_column(table, idx, name));
        }

        let duplicate_rows = count_duplicate_rows(table);
        let scores = compute_scores(&columns, duplicate_rows, row_count);

        QualityReport {
            dataset_name: dataset_name.to_string(),
            row_count,
            column_count: table.column_count(),
            columns,
            duplicate_rows,
            scores,
            generated_at: Utc::now(),
        }
    }

    fn profile_column(&self, table: &DataTable, index: usize, name: &str) -> ColumnProfile {
        let row_count = table.row_count();
        let mut missing_count = 0;
        let mut distinct: HashSet<&str> = HashSet::new();

        for value in table.column_values(index) {
            if DataTable::is_null_value(value) {
                missing_count += 1;
            } else {
                distinct.insert(value.trim());
            }
        }

        // Zero-row convention: 0% missing.
        let missing_pct = if row_count == 0 {
            0.0
        } else {
            missing_count as f64 / row_count as f64 * 100.0
        };

        ColumnProfile {
            name: name.to_string(),
            column_type: infer_column_type(table.column_values(index)),
            missing_count,
            missing_pct,
            unique_count: distinct.len(),
        }
    }
}

/// Count fully duplicate rows: n occurrences of the same row contribute n-1.
fn count_duplicate_rows(table: &DataTable) -> usize {
    let mut seen: HashMap<&[String], usize> = HashMap::new();
    for row in &table.rows {
        *seen.entry(row.as_slice()).or_insert(0) += 1;
    }
    seen.values().map(|&n| n - 1).sum()
}

fn compute_scores(
    columns: &IndexMap<String, ColumnProfile>,
    duplicate_rows: usize,
    row_count: usize,
) -> QualityScores {
    // Zero-column table: nothing missing by definition.
    let mean_missing_pct = if columns.is_empty() {
        0.0
    } else {
        columns.values().map(|c| c.missing_pct).sum::<f64>() / columns.len() as f64
    };
    let completeness = (1.0 - mean_missing_pct / 100.0) * 100.0;

    // Zero-row convention: 100% unique.
    let uniqueness = if duplicate_rows == 0 || row_count == 0 {
        100.0
    } else {
        (100.0 - duplicate_rows as f64 / row_count as f64 * 100.0).max(0.0)
    };

    QualityScores {
        completeness,
        uniqueness,
        overall: (completeness + uniqueness) / 2.0,
    }
}
