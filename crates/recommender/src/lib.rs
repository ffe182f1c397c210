//! Recommender crate for the daily number recommendation engine.
//!
//! This crate contains the orchestrator that coordinates all components
//! of the recommendation pipeline, plus its run-time settings.

pub mod config;
pub mod orchestrator;

pub use config::PipelineConfig;
pub use orchestrator::{
    MethodCandidates, Recommendation, RecommendationOrchestrator, RecommendationTrace,
    recommend_from_sources,
};
