//! Benchmarks for the quality assessor and coverage cleaner.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use vaxprep::coverage::REQUIRED_COLUMNS;
use vaxprep::{CoverageCleaner, CoverageFrame, DataTable, QualityAssessor};

const CODES: &[&str] = &["USA", "FRA", "DEU", "ITA", "BRA", "IND", "NGA", "CHN"];
const ANTIGENS: &[&str] = &["BCG", "DTP1", "DTP3", "MCV1", "MCV2", "POL3"];

/// Build a synthetic coverage table with realistic missingness.
fn synthetic_table(rows: usize, seed: u64) -> DataTable {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(rows);

    for _ in 0..rows {
        let code = CODES[rng.gen_range(0..CODES.len())];
        let antigen = ANTIGENS[rng.gen_range(0..ANTIGENS.len())];
        let year = rng.gen_range(1975..2026);
        let target = if rng.gen_bool(0.15) {
            String::new()
        } else {
            format!("{}", rng.gen_range(1_000..5_000_000))
        };
        let doses = if rng.gen_bool(0.2) {
            String::new()
        } else {
            format!("{}", rng.gen_range(0..5_000_000))
        };
        let coverage = if rng.gen_bool(0.2) {
            String::new()
        } else {
            format!("{:.1}", rng.gen_range(0.0..130.0))
        };

        data.push(vec![
            code.to_string(),
            format!("Country {}", code),
            year.to_string(),
            antigen.to_string(),
            target,
            doses,
            coverage,
        ]);
    }

    DataTable::new(REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect(), data)
}

fn bench_assess(c: &mut Criterion) {
    let mut group = c.benchmark_group("assess");
    for &rows in &[1_000usize, 10_000, 50_000] {
        let table = synthetic_table(rows, 42);
        let assessor = QualityAssessor::new();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| assessor.assess(black_box(table), "bench"));
        });
    }
    group.finish();
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean");
    for &rows in &[1_000usize, 10_000, 50_000] {
        let table = synthetic_table(rows, 42);
        let frame = CoverageFrame::from_table(&table).unwrap();
        let cleaner = CoverageCleaner::new();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &frame, |b, frame| {
            b.iter(|| cleaner.clean(black_box(frame)));
        });
    }
    group.finish();
}

fn bench_frame_conversion(c: &mut Criterion) {
    let table = synthetic_table(10_000, 42);
    c.bench_function("frame_from_table_10k", |b| {
        b.iter(|| CoverageFrame::from_table(black_box(&table)).unwrap());
    });
}

criterion_group!(benches, bench_assess, bench_clean, bench_frame_conversion);
criterion_main!(benches);
