//! # Data Loader Crate
//!
//! This crate loads historical draw records into an in-memory corpus.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (DrawRecord, DrawCorpus, weekday labels)
//! - **parser**: Parse yearly CSV files into DrawRecords
//! - **corpus**: Load every configured file into one chronological corpus
//! - **config**: Where the yearly files live
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{CorpusConfig, DrawCorpus};
//!
//! let sources = CorpusConfig::default().with_data_dir("data").source_paths();
//! let corpus = DrawCorpus::load(&sources)?;
//!
//! println!("Loaded {} draws", corpus.len());
//! ```

// Public modules
pub mod config;
pub mod corpus;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use config::CorpusConfig;
pub use corpus::LoadReport;
pub use error::{DataLoadError, Result};
pub use types::{
    DrawCorpus, DrawRecord, NUMBER_RANGE, NUMBERS_PER_DRAW, Number, WEEKDAY_LABELS, weekday_label,
    weekday_of,
};
