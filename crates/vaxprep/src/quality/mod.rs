//! Data quality assessment for tabular datasets.
//!
//! Produces per-column missingness and cardinality profiles, a
//! whole-table duplicate count, and three derived scores
//! (completeness, uniqueness, overall), each in [0, 100].

mod assessor;
mod report;

pub use assessor::QualityAssessor;
pub use report::{ColumnProfile, QualityReport, QualityScores};
