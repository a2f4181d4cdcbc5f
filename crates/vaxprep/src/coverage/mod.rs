//! Vaccination-coverage dataset: typed records and the cleaning pipeline.
//!
//! The cleaner assumes the WUENIC-style column labels defined in
//! [`columns`]. Column presence is validated once at the boundary
//! ([`validate_columns`]) so a malformed input fails with a named
//! [`MissingColumn`](crate::VaxprepError::MissingColumn) error instead of
//! deep inside a transformation step.

mod cleaner;
mod frame;

pub use cleaner::{CleanSummary, CoverageCleaner, YEAR_MAX, YEAR_MIN};
pub use frame::{CoverageFrame, CoverageRecord, YearValue};

use crate::error::{Result, VaxprepError};
use crate::input::DataTable;

/// Column labels of a coverage dataset.
pub mod columns {
    /// Country/entity identifier.
    pub const CODE: &str = "CODE";
    /// Entity display name.
    pub const NAME: &str = "NAME";
    /// Calendar year.
    pub const YEAR: &str = "YEAR";
    /// Vaccine/antigen identifier.
    pub const ANTIGEN: &str = "ANTIGEN";
    /// Target population for a (CODE, ANTIGEN) group.
    pub const TARGET_NUMBER: &str = "TARGET_NUMBER";
    /// Administered dose count.
    pub const DOSES: &str = "DOSES";
    /// Coverage percentage.
    pub const COVERAGE: &str = "COVERAGE";
}

/// Columns a row must have non-null to survive cleaning.
pub const ESSENTIAL_COLUMNS: [&str; 4] = [
    columns::CODE,
    columns::NAME,
    columns::YEAR,
    columns::ANTIGEN,
];

/// All columns the cleaning pipeline references.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    columns::CODE,
    columns::NAME,
    columns::YEAR,
    columns::ANTIGEN,
    columns::TARGET_NUMBER,
    columns::DOSES,
    columns::COVERAGE,
];

/// Check that every required column is present in the table.
pub fn validate_columns(table: &DataTable) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if table.column_index(column).is_none() {
            return Err(VaxprepError::missing_column(column));
        }
    }
    Ok(())
}
