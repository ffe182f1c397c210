//! Integration tests for the pipeline.
//!
//! These tests run the analyzers, the exposure filter, the ranker and the
//! co-occurrence finder together over a realistic window.

use analyzers::{
    Analyzer, ColumnRepeatAnalyzer, DEFAULT_WINDOW_SIZE, TailDigitAnalyzer,
    ZoneDistributionAnalyzer, build_window,
};
use chrono::{Duration, NaiveDate};
use data_loader::{DrawCorpus, DrawRecord, Number};
use pipeline::filters::ExposureFilter;
use pipeline::{
    CoOccurrenceFinder, CoPair, FilterPipeline, FrequencyRanker, count_votes, merge_candidates,
    unique_candidates,
};

/// Reference date for every test (a Monday)
fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Monday draws: two recent "signal" draws, then 39 draws covering every
/// number exactly five times. Tuesday noise must never reach the window.
fn create_test_corpus() -> DrawCorpus {
    let newest = reference() - Duration::weeks(1);
    let mut records = vec![
        DrawRecord::new(newest, [17, 18, 1, 9, 33]).unwrap(),
        DrawRecord::new(newest - Duration::weeks(1), [17, 18, 2, 10, 34]).unwrap(),
    ];

    for i in 0..39u8 {
        let n = |k: u8| (i + k) % 39 + 1;
        let date = newest - Duration::weeks(i as i64 + 2);
        records.push(DrawRecord::new(date, [n(0), n(1), n(2), n(3), n(4)]).unwrap());
    }

    for week in 0..20 {
        let tuesday = newest + Duration::days(1) - Duration::weeks(week);
        records.push(DrawRecord::new(tuesday, [17, 18, 19, 20, 21]).unwrap());
    }

    DrawCorpus::from_records(records)
}

struct Outcome {
    primary: Vec<Number>,
    pair: Option<CoPair>,
}

fn run(corpus: &DrawCorpus, date: NaiveDate) -> Outcome {
    let window = build_window(corpus, date, DEFAULT_WINDOW_SIZE);

    let merged = merge_candidates(vec![
        ZoneDistributionAnalyzer::new().candidates(&window),
        TailDigitAnalyzer::new().candidates(&window),
        ColumnRepeatAnalyzer::new().candidates(&window),
    ]);
    let votes = count_votes(&merged);

    let filters = FilterPipeline::new().add_filter(ExposureFilter::new());
    let survivors = filters.apply(unique_candidates(&merged), &window).unwrap();

    let primary = FrequencyRanker::new().rank(&votes, &survivors);
    let pair = CoOccurrenceFinder::new().find(&primary, &window);
    Outcome { primary, pair }
}

#[test]
fn test_window_excludes_other_weekdays() {
    let corpus = create_test_corpus();
    let window = build_window(&corpus, reference(), DEFAULT_WINDOW_SIZE);

    assert_eq!(window.len(), 41);
    assert!(window.draws().iter().all(|d| d.weekday() == 0));
    assert_eq!(window.draws()[0].numbers(), &[17, 18, 1, 9, 33]);
}

#[test]
fn test_analyzer_outputs() {
    let corpus = create_test_corpus();
    let window = build_window(&corpus, reference(), DEFAULT_WINDOW_SIZE);

    // Zone 3 (44) then zone 1, which ties zone 2 at 42 and wins on order
    assert_eq!(ZoneDistributionAnalyzer::new().analyze(&window), vec![17, 18, 1, 2]);
    // Tails 7 and 8 lead with 22 hits each; 7 is seen first
    assert_eq!(TailDigitAnalyzer::new().analyze(&window), vec![7, 8, 17]);
    assert_eq!(ColumnRepeatAnalyzer::new().analyze(&window), vec![17, 18]);
}

#[test]
fn test_full_pipeline() {
    let corpus = create_test_corpus();
    let outcome = run(&corpus, reference());

    // 17 and 18 collect the most votes but are hot (7 hits > 5.26 * 1.2)
    assert_eq!(outcome.primary, vec![1, 2, 7, 8]);

    // (1, 2) and (7, 8) both co-occur four times; (1, 2) is met first
    let pair = outcome.pair.unwrap();
    assert_eq!(pair.numbers, (1, 2));
    assert_eq!(pair.count, 4);
}

#[test]
fn test_pipeline_is_deterministic() {
    let corpus = create_test_corpus();
    let first = run(&corpus, reference());
    let second = run(&corpus, reference());

    assert_eq!(first.primary, second.primary);
    assert_eq!(first.pair, second.pair);
}

#[test]
fn test_identical_draws_degrade_to_empty() {
    let monday = reference() - Duration::weeks(1);
    let records = (0..10)
        .map(|w| DrawRecord::new(monday - Duration::weeks(w), [1, 2, 3, 4, 5]).unwrap())
        .collect();
    let corpus = DrawCorpus::from_records(records);

    let window = build_window(&corpus, reference(), DEFAULT_WINDOW_SIZE);
    assert_eq!(ColumnRepeatAnalyzer::new().analyze(&window), vec![1, 2]);
    assert_eq!(TailDigitAnalyzer::new().analyze(&window), vec![1, 2]);

    // 1 and 2 are drawn every time, far above the baseline
    let outcome = run(&corpus, reference());
    assert!(outcome.primary.is_empty());
    assert_eq!(outcome.pair, None);

    let pair = CoOccurrenceFinder::new().find(&[1, 2], &window).unwrap();
    assert_eq!(pair.numbers, (1, 2));
    assert_eq!(pair.count, 10);
}

#[test]
fn test_empty_window_produces_empty_outcome() {
    let corpus = create_test_corpus();
    let wednesday = reference() + Duration::days(2);

    let outcome = run(&corpus, wednesday);
    assert!(outcome.primary.is_empty());
    assert_eq!(outcome.pair, None);
}

#[test]
fn test_primary_properties_hold_across_weekdays() {
    let corpus = create_test_corpus();

    for offset in 0..7 {
        let date = reference() + Duration::days(offset);
        let window = build_window(&corpus, date, DEFAULT_WINDOW_SIZE);
        let outcome = run(&corpus, date);

        assert!(window.len() <= DEFAULT_WINDOW_SIZE);
        assert!(outcome.primary.len() <= 5);
        if let Some(pair) = outcome.pair {
            assert!(outcome.primary.contains(&pair.numbers.0));
            assert!(outcome.primary.contains(&pair.numbers.1));
            assert!(pair.numbers.0 < pair.numbers.1);
        }
    }
}
