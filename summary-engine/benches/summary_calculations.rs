//! FILENAME: summary-engine/benches/summary_calculations.rs
//! Benchmarks for the summary calculation engine over realistic
//! cardinalities (tens of sources × tens of categories).

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use locale_format::Locale;
use summary_engine::{calculate_summary, CategoryAmount, Period, PeriodSummary, SourceSummary};

/// Builds a period with `source_count` sources, each referencing a
/// rotating subset of `category_count` categories, plus derived
/// aggregates so reconciliation runs its full comparison path.
fn build_summary(source_count: usize, category_count: usize) -> PeriodSummary {
    let categories: Vec<String> = (0..category_count)
        .map(|c| format!("Category {:02}", c))
        .collect();

    let mut summary = PeriodSummary::new(Period::new(2025, 5, "Mayıs 2025"));
    let mut column_sums = vec![0.0; category_count];

    for s in 0..source_count {
        let mut source = SourceSummary::new(format!("Source {:02}", s));
        // Each source covers roughly two thirds of the categories.
        for (c, name) in categories.iter().enumerate() {
            if (s + c) % 3 != 0 {
                let amount = ((s * 31 + c * 7) % 500) as f64 + 0.5;
                source = source.with_amount(name.clone(), amount);
                column_sums[c] += amount;
            }
        }
        summary.sources.push(source);
    }

    summary.overall_category_totals = categories
        .iter()
        .zip(&column_sums)
        .map(|(name, &sum)| CategoryAmount::new(name.clone(), sum))
        .collect();
    summary.grand_total = Some(column_sums.iter().sum());

    summary
}

fn bench_calculate_summary(c: &mut Criterion) {
    let small = build_summary(5, 8);
    let realistic = build_summary(30, 20);
    let large = build_summary(100, 50);

    c.bench_function("calculate_summary 5x8", |b| {
        b.iter(|| calculate_summary(black_box(&small), Locale::Tr))
    });
    c.bench_function("calculate_summary 30x20", |b| {
        b.iter(|| calculate_summary(black_box(&realistic), Locale::Tr))
    });
    c.bench_function("calculate_summary 100x50", |b| {
        b.iter(|| calculate_summary(black_box(&large), Locale::En))
    });
}

criterion_group!(benches, bench_calculate_summary);
criterion_main!(benches);
