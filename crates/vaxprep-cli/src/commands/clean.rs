//! Clean command - run the coverage cleaner and export the result.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use vaxprep::{CoverageCleaner, CoverageFrame, Parser};

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    summary: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    let (table, metadata) = Parser::new().parse_file(&file)?;
    if verbose {
        println!(
            "Loaded {} rows x {} columns ({})",
            metadata.row_count, metadata.column_count, metadata.format
        );
    }

    let (cleaned, clean_summary) = CoverageCleaner::new().clean_table(&table)?;

    let output_path = output.unwrap_or_else(|| {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "coverage".to_string());
        file.with_file_name(format!("{}_clean.{}", stem, format.extension()))
    });

    match format {
        OutputFormat::Csv => cleaned.write_csv(&output_path)?,
        OutputFormat::Tsv => cleaned.write_delimited(&output_path, b'\t')?,
        OutputFormat::Json => {
            let frame = CoverageFrame::from_table(&cleaned)?;
            let rows: Vec<serde_json::Value> = frame
                .records
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "CODE": r.code,
                        "NAME": r.name,
                        "YEAR": r.year.as_f64(),
                        "ANTIGEN": r.antigen,
                        "TARGET_NUMBER": r.target_number,
                        "DOSES": r.doses,
                        "COVERAGE": r.coverage,
                    })
                })
                .collect();
            fs::write(&output_path, serde_json::to_string_pretty(&rows)?)?;
        }
    }

    println!("{}", clean_summary);
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    if summary {
        let summary_path = output_path.with_extension("summary.json");
        fs::write(&summary_path, serde_json::to_string_pretty(&clean_summary)?)?;
        println!(
            "{} {}",
            "Summary written to".green().bold(),
            summary_path.display().to_string().white()
        );
    }

    Ok(())
}
