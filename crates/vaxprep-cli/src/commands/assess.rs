//! Assess command - run the quality assessor over a data file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use vaxprep::{Parser, QualityAssessor};

pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Assessing".cyan().bold(),
        file.display().to_string().white()
    );

    let (table, metadata) = Parser::new().parse_file(&file)?;

    if verbose {
        println!(
            "Loaded {} rows x {} columns ({}, {})",
            metadata.row_count, metadata.column_count, metadata.format, metadata.hash
        );
    }

    let dataset_name = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let report = QualityAssessor::new().assess(&table, &dataset_name);

    let rendered = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.to_string()
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)?;
            println!(
                "{} {}",
                "Saved report to".green().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{}", rendered),
    }

    let overall = report.scores.overall;
    let colored_score = if overall >= 90.0 {
        format!("{:.2}%", overall).green()
    } else if overall >= 70.0 {
        format!("{:.2}%", overall).yellow()
    } else {
        format!("{:.2}%", overall).red()
    };
    println!("Overall quality: {}", colored_score.bold());

    Ok(())
}
