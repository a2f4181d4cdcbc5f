//! End-to-end tests: parse a raw file, assess it, clean it, export it.

use std::io::Write;

use tempfile::NamedTempFile;

use vaxprep::coverage::{self, YEAR_MAX, YEAR_MIN};
use vaxprep::{CoverageCleaner, CoverageFrame, Parser, QualityAssessor, VaxprepError};

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const RAW: &str = "\
CODE,NAME,YEAR,ANTIGEN,TARGET_NUMBER,DOSES,COVERAGE
usa,United States,2019,BCG,1000,500,50
USA ,United States,2020,BCG,,,60
USA,United States,2021,BCG,3000,,70
USA,United States,abcd,BCG,1000,900,90
USA,United States,1979,BCG,1000,900,90
FRA,France,2020,MCV1,1000,750,
DEU,Germany,2020,DTP1,1000,,120
,Germany,2020,DTP1,1000,950,95
ITA,Italy,2020,BCG,-50,100,10
";

#[test]
fn test_parse_and_assess() {
    let file = write_file(RAW);
    let (table, meta) = Parser::new().parse_file(file.path()).unwrap();

    assert_eq!(meta.format, "csv");
    assert!(meta.hash.starts_with("sha256:"));
    assert_eq!(meta.row_count, 9);
    assert_eq!(meta.column_count, 7);

    let report = QualityAssessor::new().assess(&table, "wuenic coverage");
    assert_eq!(report.columns["CODE"].missing_count, 1);
    assert_eq!(report.columns["TARGET_NUMBER"].missing_count, 1);
    assert!(report.scores.completeness < 100.0);
    assert!(report.scores.overall <= 100.0 && report.scores.overall >= 0.0);

    let rendered = report.to_string();
    assert!(rendered.contains("DATA QUALITY ASSESSMENT: WUENIC COVERAGE"));
}

#[test]
fn test_clean_pipeline_end_to_end() {
    let file = write_file(RAW);
    let (table, _) = Parser::new().parse_file(file.path()).unwrap();

    let (cleaned, summary) = CoverageCleaner::new().clean_table(&table).unwrap();

    // Dropped: null CODE row, "abcd" year, 1979, negative target.
    assert_eq!(summary.rows_in, 9);
    assert_eq!(summary.rows_out, 5);
    assert_eq!(summary.dropped_missing_essential, 1);
    assert_eq!(summary.dropped_year_out_of_range, 2);
    assert_eq!(summary.dropped_negative, 1);

    // Row 2 target imputed with median of [1000, 3000] = 2000.
    assert_eq!(summary.targets_imputed, 1);

    let frame = CoverageFrame::from_table(&cleaned).unwrap();
    let usa_2020 = frame
        .records
        .iter()
        .find(|r| r.year.as_f64() == Some(2020.0) && r.code.as_deref() == Some("USA"))
        .unwrap();
    assert_eq!(usa_2020.target_number, Some(2000.0));
    // Doses derived from imputed target: 60% of 2000.
    assert_eq!(usa_2020.doses, Some(1200.0));

    // FRA coverage derived: 750 / 1000 * 100.
    let fra = frame
        .records
        .iter()
        .find(|r| r.code.as_deref() == Some("FRA"))
        .unwrap();
    assert_eq!(fra.coverage, Some(75.0));

    // DEU coverage capped at 100, doses derived before the cap (120%).
    let deu = frame
        .records
        .iter()
        .find(|r| r.code.as_deref() == Some("DEU"))
        .unwrap();
    assert_eq!(deu.coverage, Some(100.0));
    assert_eq!(deu.doses, Some(1200.0));

    // Post-conditions on every surviving row.
    for record in &frame.records {
        assert!(record.has_essential_fields());
        let year = record.year.as_f64().unwrap();
        assert!((YEAR_MIN..=YEAR_MAX).contains(&year));
        let code = record.code.as_deref().unwrap();
        assert_eq!(code, code.trim().to_uppercase());
        for value in [record.target_number, record.doses, record.coverage]
            .into_iter()
            .flatten()
        {
            assert!(value >= 0.0);
        }
        if let Some(coverage) = record.coverage {
            assert!(coverage <= 100.0);
        }
    }
}

#[test]
fn test_clean_is_idempotent_through_files() {
    let file = write_file(RAW);
    let (table, _) = Parser::new().parse_file(file.path()).unwrap();

    let cleaner = CoverageCleaner::new();
    let (once, _) = cleaner.clean_table(&table).unwrap();

    // Export, re-parse, and clean again: nothing changes.
    let out = NamedTempFile::new().unwrap();
    once.write_csv(out.path()).unwrap();
    let (reparsed, _) = Parser::new().parse_file(out.path()).unwrap();
    let (twice, summary) = cleaner.clean_table(&reparsed).unwrap();

    assert_eq!(once, twice);
    assert_eq!(summary.rows_in, summary.rows_out);
}

#[test]
fn test_missing_column_fails_at_boundary() {
    let file = write_file("CODE,NAME,YEAR,ANTIGEN\nUSA,United States,2020,BCG\n");
    let (table, _) = Parser::new().parse_file(file.path()).unwrap();

    match CoverageCleaner::new().clean_table(&table) {
        Err(VaxprepError::MissingColumn { column }) => {
            assert_eq!(column, coverage::columns::TARGET_NUMBER);
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_empty_dataset_valid_for_both_components() {
    let file = write_file("CODE,NAME,YEAR,ANTIGEN,TARGET_NUMBER,DOSES,COVERAGE\n");
    let (table, _) = Parser::new().parse_file(file.path()).unwrap();

    let report = QualityAssessor::new().assess(&table, "empty");
    assert_eq!(report.scores.overall, 100.0);

    let (cleaned, summary) = CoverageCleaner::new().clean_table(&table).unwrap();
    assert_eq!(cleaned.row_count(), 0);
    assert_eq!(summary.rows_out, 0);
}

#[test]
fn test_tsv_input() {
    let file = write_file(
        "CODE\tNAME\tYEAR\tANTIGEN\tTARGET_NUMBER\tDOSES\tCOVERAGE\n\
         usa\tUnited States\t2020\tBCG\t1000\t930\t93\n",
    );
    let (table, meta) = Parser::new().parse_file(file.path()).unwrap();
    assert_eq!(meta.format, "tsv");

    let (cleaned, _) = CoverageCleaner::new().clean_table(&table).unwrap();
    assert_eq!(cleaned.get(0, 0), Some("USA"));
}
