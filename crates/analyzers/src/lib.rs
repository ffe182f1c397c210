//! # Analyzers Crate
//!
//! This crate implements the candidate-generating heuristics for the daily
//! number recommendation.
//!
//! ## Components
//!
//! ### Analysis Window
//! Past draws that fell on the reference date's weekday, newest first,
//! capped at 800. Every analyzer sees exactly this window.
//!
//! ### Zone-Distribution Analyzer
//! The two hottest numbers of each of the two hottest zones (up to 4).
//!
//! ### Tail-Digit Analyzer
//! Drawn numbers ending in the two most common last digits (up to 3).
//!
//! ### Column-Repeat Analyzer
//! The most repeated first-ball and second-ball values (up to 2).
//!
//! ### Tally
//! The insertion-ordered counting multiset behind every "most common"
//! decision, shared with the downstream vote merge.
//!
//! ## Example Usage
//!
//! ```ignore
//! use analyzers::{build_window, Analyzer, ZoneDistributionAnalyzer, DEFAULT_WINDOW_SIZE};
//!
//! let window = build_window(&corpus, today, DEFAULT_WINDOW_SIZE);
//! let candidates = ZoneDistributionAnalyzer::new().candidates(&window);
//! ```

// Public modules
pub mod column_repeat;
pub mod tail_digit;
pub mod tally;
pub mod traits;
pub mod types;
pub mod window;
pub mod zone_distribution;
pub mod zones;

// Re-export commonly used types
pub use column_repeat::ColumnRepeatAnalyzer;
pub use tail_digit::TailDigitAnalyzer;
pub use tally::Tally;
pub use traits::Analyzer;
pub use types::{AnalysisMethod, Candidate};
pub use window::{AnalysisWindow, DEFAULT_WINDOW_SIZE, build_window};
pub use zone_distribution::ZoneDistributionAnalyzer;
pub use zones::{ZONES, Zone, zone_of};

/// The three analyzers in pipeline order
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(ZoneDistributionAnalyzer::new()),
        Box::new(TailDigitAnalyzer::new()),
        Box::new(ColumnRepeatAnalyzer::new()),
    ]
}
