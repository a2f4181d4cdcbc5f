//! The coverage cleaning pipeline.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::input::DataTable;

use super::frame::{CoverageFrame, CoverageRecord};

/// Earliest calendar year accepted by the pipeline.
pub const YEAR_MIN: f64 = 1980.0;
/// Latest calendar year accepted by the pipeline.
pub const YEAR_MAX: f64 = 2024.0;

/// Audit counters for one cleaning run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CleanSummary {
    /// Records in the input frame.
    pub rows_in: usize,
    /// Records in the cleaned frame.
    pub rows_out: usize,
    /// Rows dropped for a null CODE, NAME, YEAR, or ANTIGEN.
    pub dropped_missing_essential: usize,
    /// Rows dropped for a YEAR outside [1980, 2024] (or non-numeric).
    pub dropped_year_out_of_range: usize,
    /// Rows dropped for an explicit negative numeric value.
    pub dropped_negative: usize,
    /// TARGET_NUMBER nulls filled with the (CODE, ANTIGEN) group median.
    pub targets_imputed: usize,
    /// DOSES values derived from COVERAGE and TARGET_NUMBER.
    pub doses_derived: usize,
    /// COVERAGE values derived from DOSES and TARGET_NUMBER.
    pub coverage_derived: usize,
    /// COVERAGE values capped down to 100.
    pub coverage_capped: usize,
}

impl fmt::Display for CleanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Coverage data cleaned: {} of {} records remaining",
            self.rows_out, self.rows_in
        )?;
        writeln!(
            f,
            "  dropped: {} missing essential fields, {} out-of-range years, {} negative values",
            self.dropped_missing_essential, self.dropped_year_out_of_range, self.dropped_negative
        )?;
        write!(
            f,
            "  filled: {} targets imputed, {} doses derived, {} coverage derived, {} capped at 100%",
            self.targets_imputed, self.doses_derived, self.coverage_derived, self.coverage_capped
        )
    }
}

/// Cleans a coverage dataset through a fixed, ordered pipeline.
///
/// Pure with respect to its input: the caller's frame is never modified.
/// Rows that cannot satisfy the essential-field and year constraints are
/// discarded, not repaired. The pipeline is idempotent: cleaning an
/// already-clean frame changes nothing.
#[derive(Debug, Default)]
pub struct CoverageCleaner;

impl CoverageCleaner {
    /// Create a new cleaner.
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over a typed frame.
    pub fn clean(&self, frame: &CoverageFrame) -> (CoverageFrame, CleanSummary) {
        let mut summary = CleanSummary {
            rows_in: frame.len(),
            ..CleanSummary::default()
        };

        let mut records: Vec<CoverageRecord> = frame.records.clone();

        self.filter_essential(&mut records, &mut summary);
        self.normalize_codes(&mut records);
        self.filter_year_range(&mut records, &mut summary);
        self.impute_targets(&mut records, &mut summary);
        self.derive_doses(&mut records, &mut summary);
        self.derive_coverage(&mut records, &mut summary);
        self.cap_coverage(&mut records, &mut summary);
        self.filter_negative(&mut records, &mut summary);

        summary.rows_out = records.len();
        (CoverageFrame { records }, summary)
    }

    /// Validate, convert, clean, and render back to a raw table.
    pub fn clean_table(&self, table: &DataTable) -> Result<(DataTable, CleanSummary)> {
        let frame = CoverageFrame::from_table(table)?;
        let (cleaned, summary) = self.clean(&frame);
        Ok((cleaned.to_table(), summary))
    }

    /// Step 1: drop rows where any essential field is null.
    fn filter_essential(&self, records: &mut Vec<CoverageRecord>, summary: &mut CleanSummary) {
        let before = records.len();
        records.retain(CoverageRecord::has_essential_fields);
        summary.dropped_missing_essential = before - records.len();
    }

    /// Step 2: uppercase and trim country codes.
    fn normalize_codes(&self, records: &mut [CoverageRecord]) {
        for record in records {
            if let Some(code) = &mut record.code {
                *code = code.trim().to_uppercase();
            }
        }
    }

    /// Step 3: keep rows with a numeric YEAR in [1980, 2024]. Non-numeric
    /// years were coerced to null and fail the range check here.
    fn filter_year_range(&self, records: &mut Vec<CoverageRecord>, summary: &mut CleanSummary) {
        let before = records.len();
        records.retain(|r| {
            r.year
                .as_f64()
                .map(|y| (YEAR_MIN..=YEAR_MAX).contains(&y))
                .unwrap_or(false)
        });
        summary.dropped_year_out_of_range = before - records.len();
    }

    /// Step 4: fill null TARGET_NUMBER with the (CODE, ANTIGEN) group
    /// median, computed over non-null values only.
    fn impute_targets(&self, records: &mut [CoverageRecord], summary: &mut CleanSummary) {
        let mut groups: HashMap<(String, String), Vec<f64>> = HashMap::new();
        for record in records.iter() {
            if let (Some(code), Some(antigen), Some(target)) =
                (&record.code, &record.antigen, record.target_number)
            {
                groups
                    .entry((code.clone(), antigen.clone()))
                    .or_default()
                    .push(target);
            }
        }

        let medians: HashMap<(String, String), f64> = groups
            .into_iter()
            .map(|(key, values)| (key, median(values)))
            .collect();

        for record in records.iter_mut() {
            if record.target_number.is_some() {
                continue;
            }
            if let (Some(code), Some(antigen)) = (&record.code, &record.antigen) {
                if let Some(&m) = medians.get(&(code.clone(), antigen.clone())) {
                    record.target_number = Some(m);
                    summary.targets_imputed += 1;
                }
            }
        }
    }

    /// Step 5: DOSES = COVERAGE / 100 * TARGET_NUMBER where derivable.
    fn derive_doses(&self, records: &mut [CoverageRecord], summary: &mut CleanSummary) {
        for record in records {
            if record.doses.is_none() {
                if let (Some(coverage), Some(target)) = (record.coverage, record.target_number) {
                    record.doses = Some(coverage / 100.0 * target);
                    summary.doses_derived += 1;
                }
            }
        }
    }

    /// Step 6: COVERAGE = DOSES / TARGET_NUMBER * 100 where derivable and
    /// the target population is positive.
    fn derive_coverage(&self, records: &mut [CoverageRecord], summary: &mut CleanSummary) {
        for record in records {
            if record.coverage.is_none() {
                if let (Some(doses), Some(target)) = (record.doses, record.target_number) {
                    if target > 0.0 {
                        record.coverage = Some(doses / target * 100.0);
                        summary.coverage_derived += 1;
                    }
                }
            }
        }
    }

    /// Step 7: clamp COVERAGE above 100 down to exactly 100.
    fn cap_coverage(&self, records: &mut [CoverageRecord], summary: &mut CleanSummary) {
        for record in records {
            if let Some(coverage) = record.coverage {
                if coverage > 100.0 {
                    record.coverage = Some(100.0);
                    summary.coverage_capped += 1;
                }
            }
        }
    }

    /// Step 8: drop rows holding an explicit negative TARGET_NUMBER,
    /// DOSES, or COVERAGE. Null values never drop a row.
    fn filter_negative(&self, records: &mut Vec<CoverageRecord>, summary: &mut CleanSummary) {
        let before = records.len();
        records.retain(|r| {
            [r.target_number, r.doses, r.coverage]
                .iter()
                .all(|v| v.map(|x| x >= 0.0).unwrap_or(true))
        });
        summary.dropped_negative = before - records.len();
    }
}

/// Median of a non-empty sample. Even-length samples average the two
/// middle values.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
