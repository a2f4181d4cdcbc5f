//! Vaxprep: data preparation for vaccination coverage statistics.
//!
//! Vaxprep loads raw WUENIC-style coverage tables, assesses their quality
//! (missingness, duplication, derived scores), and cleans them through a
//! fixed pipeline of filtering, normalization, imputation, and derivation
//! steps.
//!
//! # Core Principles
//!
//! - **Non-destructive**: input tables are never modified; cleaning
//!   returns a new dataset.
//! - **Boundary validation**: required columns are checked up front, so a
//!   malformed input fails with a named error instead of mid-pipeline.
//! - **Data problems are not errors**: nulls, out-of-range years, and
//!   negative values are handled by filtering and imputation; only
//!   structural problems (absent columns) raise.
//!
//! # Example
//!
//! ```no_run
//! use vaxprep::{CoverageCleaner, Parser, QualityAssessor};
//!
//! let parser = Parser::new();
//! let (table, _meta) = parser.parse_file("coverage.csv").unwrap();
//!
//! let report = QualityAssessor::new().assess(&table, "coverage");
//! println!("{}", report);
//!
//! let (cleaned, summary) = CoverageCleaner::new().clean_table(&table).unwrap();
//! println!("{}", summary);
//! cleaned.write_csv("coverage_clean.csv").unwrap();
//! ```

pub mod coverage;
pub mod error;
pub mod input;
pub mod quality;
pub mod schema;

pub use coverage::{CleanSummary, CoverageCleaner, CoverageFrame, CoverageRecord};
pub use error::{Result, VaxprepError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use quality::{ColumnProfile, QualityAssessor, QualityReport, QualityScores};
pub use schema::ColumnType;
