//! Init command - scaffold the analysis-project directory layout.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;

/// Directories of the standard analysis project.
const DIRECTORIES: &[&str] = &[
    "data/raw",
    "data/cleaned",
    "data/processed",
    "data/external",
    "sql_scripts",
    "notebooks/exploration",
    "notebooks/analysis",
    "src/data_processing",
    "src/analysis",
    "src/visualization",
    "output/reports",
    "output/charts",
    "output/exports",
    "config",
    "tests",
];

const CONFIG_NOTE: &str = "\
# Global Vaccination Data Analysis Project Configuration

## Data Sources
- WHO/UNICEF Estimates of National Immunization Coverage (WUENIC)
- WHO Immunization Data Portal
- Disease incidence and surveillance data

## Key Metrics
- Global vaccination coverage rates
- Disease incidence trends
- Vaccine effectiveness indicators
- Regional performance comparisons

## Target Deliverables
1. Clean SQL database with normalized schema
2. Interactive dashboards
3. Comprehensive analytical reports
4. Predictive models for coverage forecasting
";

pub fn run(dir: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "{} {}",
        "Scaffolding project in".cyan().bold(),
        dir.display().to_string().white()
    );

    for directory in DIRECTORIES {
        let path = dir.join(directory);
        fs::create_dir_all(&path)
            .map_err(|e| format!("Failed to create '{}': {}", path.display(), e))?;
        if verbose {
            println!("Created directory: {}", directory);
        }
    }

    let config_path = dir.join("config/project_config.md");
    fs::write(&config_path, CONFIG_NOTE)
        .map_err(|e| format!("Failed to write '{}': {}", config_path.display(), e))?;

    println!(
        "{} {} directories and {}",
        "Created".green().bold(),
        DIRECTORIES.len(),
        "config/project_config.md".white()
    );
    Ok(())
}
