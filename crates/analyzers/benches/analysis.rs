//! Benchmarks for window building and the three analyzers
//!
//! Run with: cargo bench --package analyzers
//!
//! Uses a synthetic corpus of eight years of daily draws, which gives
//! roughly 417 draws per weekday window.

use analyzers::{
    Analyzer, ColumnRepeatAnalyzer, DEFAULT_WINDOW_SIZE, TailDigitAnalyzer,
    ZoneDistributionAnalyzer, build_window,
};
use chrono::{Duration, NaiveDate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{DrawCorpus, DrawRecord, Number};

/// Deterministic pseudo-random draws (LCG), one per day
fn synthetic_corpus(days: i64) -> DrawCorpus {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;

    let records = (0..days)
        .map(|day| {
            let mut numbers: Vec<Number> = Vec::with_capacity(5);
            while numbers.len() < 5 {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let n = ((state >> 33) % 39) as Number + 1;
                if !numbers.contains(&n) {
                    numbers.push(n);
                }
            }
            let numbers: [Number; 5] = numbers.try_into().unwrap();
            DrawRecord::new(start + Duration::days(day), numbers).unwrap()
        })
        .collect();
    DrawCorpus::from_records(records)
}

fn bench_build_window(c: &mut Criterion) {
    let corpus = synthetic_corpus(365 * 8);
    let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    c.bench_function("build_window", |b| {
        b.iter(|| {
            let window = build_window(black_box(&corpus), black_box(today), DEFAULT_WINDOW_SIZE);
            black_box(window)
        })
    });
}

fn bench_analyzers(c: &mut Criterion) {
    let corpus = synthetic_corpus(365 * 8);
    let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let window = build_window(&corpus, today, DEFAULT_WINDOW_SIZE);

    let zone = ZoneDistributionAnalyzer::new();
    let tail = TailDigitAnalyzer::new();
    let column = ColumnRepeatAnalyzer::new();

    c.bench_function("zone_distribution", |b| {
        b.iter(|| black_box(zone.analyze(black_box(&window))))
    });
    c.bench_function("tail_digit", |b| {
        b.iter(|| black_box(tail.analyze(black_box(&window))))
    });
    c.bench_function("column_repeat", |b| {
        b.iter(|| black_box(column.analyze(black_box(&window))))
    });
}

criterion_group!(benches, bench_build_window, bench_analyzers);
criterion_main!(benches);
