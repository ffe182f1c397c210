//! # Recommendation Orchestrator
//!
//! This module coordinates the entire recommendation pipeline:
//! 1. Build the same-weekday analysis window
//! 2. Run the three analyzers over it
//! 3. Merge their candidates; duplicates count as votes
//! 4. Drop hot and cold numbers
//! 5. Rank the survivors by votes into the primary set
//! 6. Find the primary pair drawn together most often
//! 7. Assemble the result
//!
//! The orchestrator only ever reads the corpus. Clones share it through an
//! `Arc`, so concurrent runs never interfere with each other.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};

use analyzers::{
    AnalysisMethod, AnalysisWindow, Analyzer, Candidate, build_window, default_analyzers,
};
use data_loader::{CorpusConfig, DrawCorpus, Number, weekday_label};
use pipeline::filters::{ExposureBands, ExposureFilter};
use pipeline::{
    CoOccurrenceFinder, CoPair, FilterPipeline, FrequencyRanker, count_votes, merge_candidates,
    unique_candidates,
};

use crate::config::PipelineConfig;

/// Final recommendation for one reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Localized weekday of the reference date
    pub weekday: String,
    /// Up to five numbers, strongest first
    pub primary_numbers: Vec<Number>,
    /// The best co-occurring pair, ascending; empty when there is none
    pub co_pair: Vec<Number>,
    /// Draws containing the pair; 0 when there is none
    pub co_pair_count: usize,
}

impl Recommendation {
    /// Package the pipeline outputs
    pub fn assemble(weekday: u8, primary_numbers: Vec<Number>, co_pair: Option<CoPair>) -> Self {
        Self {
            weekday: weekday_label(weekday).to_string(),
            primary_numbers,
            co_pair: co_pair.map(|p| p.to_vec()).unwrap_or_default(),
            co_pair_count: co_pair.map(|p| p.count).unwrap_or(0),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize recommendation")
    }
}

/// Numbers one analyzer proposed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodCandidates {
    pub method: AnalysisMethod,
    pub numbers: Vec<Number>,
}

/// Every intermediate result of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationTrace {
    pub reference_date: NaiveDate,
    pub window_size: usize,
    /// Newest and oldest draw dates in the window
    pub window_span: Option<(NaiveDate, NaiveDate)>,
    pub candidates: Vec<MethodCandidates>,
    /// Vote counts over the merged candidates, highest first
    pub votes: Vec<(Number, usize)>,
    pub exposure: ExposureBands,
    /// Distinct candidates left after filtering
    pub survivors: Vec<Number>,
    pub recommendation: Recommendation,
}

/// Main orchestrator that coordinates the recommendation pipeline
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    corpus: Arc<DrawCorpus>,
    config: PipelineConfig,
    analyzers: Arc<Vec<Box<dyn Analyzer>>>,
    filter_pipeline: Arc<FilterPipeline>,
    ranker: Arc<FrequencyRanker>,
    finder: CoOccurrenceFinder,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator over an already loaded corpus
    pub fn new(corpus: Arc<DrawCorpus>, config: PipelineConfig) -> Self {
        let filter_pipeline =
            Arc::new(FilterPipeline::new().add_filter(exposure_filter(&config)));
        Self {
            corpus,
            config,
            analyzers: Arc::new(default_analyzers()),
            filter_pipeline,
            ranker: Arc::new(FrequencyRanker::new().with_limit(config.primary_size)),
            finder: CoOccurrenceFinder::new(),
        }
    }

    /// Load the corpus from the configured sources and create an orchestrator
    ///
    /// Fails with [`data_loader::DataLoadError::DataUnavailable`] (reachable
    /// through `downcast_ref`) when none of the sources exist.
    pub fn from_config(corpus_config: &CorpusConfig, config: PipelineConfig) -> Result<Self> {
        let corpus = DrawCorpus::load(&corpus_config.source_paths())
            .context("Failed to load draw corpus")?;
        Ok(Self::new(Arc::new(corpus), config))
    }

    pub fn corpus(&self) -> &DrawCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The analysis window a run for `date` would use
    pub fn window(&self, date: NaiveDate) -> AnalysisWindow {
        build_window(&self.corpus, date, self.config.window_size)
    }

    /// Main entry point: the recommendation for a reference date
    pub fn recommend(&self, date: NaiveDate) -> Result<Recommendation> {
        self.explain(date).map(|trace| trace.recommendation)
    }

    /// Run the pipeline and keep every intermediate result
    #[instrument(skip(self))]
    pub fn explain(&self, date: NaiveDate) -> Result<RecommendationTrace> {
        let start_time = Instant::now();

        // Window
        let window = self.window(date);
        debug!(
            "Built window for {}: {} draws on weekday {}",
            date,
            window.len(),
            window.weekday()
        );

        // Analyzers
        let lists: Vec<Vec<Candidate>> = self
            .analyzers
            .iter()
            .map(|analyzer| analyzer.candidates(&window))
            .collect();
        let per_method: Vec<MethodCandidates> = self
            .analyzers
            .iter()
            .zip(&lists)
            .map(|(analyzer, list)| MethodCandidates {
                method: analyzer.method(),
                numbers: list.iter().map(|c| c.number).collect(),
            })
            .collect();
        for method in &per_method {
            debug!("{} proposed {:?}", method.method, method.numbers);
        }

        // Merge
        let merged = merge_candidates(lists);
        let votes = count_votes(&merged);

        // Filter
        let survivors = self
            .filter_pipeline
            .apply(unique_candidates(&merged), &window)
            .context("Failed to apply filters")?;
        info!(
            "Merged {} candidates ({} distinct), {} survive filtering",
            merged.len(),
            votes.len(),
            survivors.len()
        );

        // Rank and pair
        let primary = self.ranker.rank(&votes, &survivors);
        let pair = self.finder.find(&primary, &window);

        let recommendation = Recommendation::assemble(window.weekday(), primary, pair);

        let elapsed = start_time.elapsed();
        info!(
            "Recommendation for {}: {:?} pair {:?} x{} in {:.2?}",
            date,
            recommendation.primary_numbers,
            recommendation.co_pair,
            recommendation.co_pair_count,
            elapsed
        );

        Ok(RecommendationTrace {
            reference_date: date,
            window_size: window.len(),
            window_span: window_span(&window),
            candidates: per_method,
            votes: votes.most_common(),
            exposure: exposure_filter(&self.config).bands(&window),
            survivors: survivors.iter().map(|c| c.number).collect(),
            recommendation,
        })
    }
}

/// Load the sources afresh and produce one recommendation
pub fn recommend_from_sources(sources: &[PathBuf], date: NaiveDate) -> Result<Recommendation> {
    let corpus = DrawCorpus::load(sources).context("Failed to load draw corpus")?;
    RecommendationOrchestrator::new(Arc::new(corpus), PipelineConfig::default()).recommend(date)
}

fn exposure_filter(config: &PipelineConfig) -> ExposureFilter {
    ExposureFilter::new().with_bands(config.hot_ratio, config.cold_ratio)
}

fn window_span(window: &AnalysisWindow) -> Option<(NaiveDate, NaiveDate)> {
    let newest = window.draws().first()?;
    let oldest = window.draws().last()?;
    Some((newest.date(), oldest.date()))
}
