//! Where the yearly draw files live.
//!
//! By default one file per year is expected under `data/`, named
//! `今彩539_<year>.csv`. Callers can point at another directory, change the
//! year span, or bypass the naming scheme entirely with explicit paths.

use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Default directory holding the draw files
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default file name prefix; the year and `.csv` are appended
pub const DEFAULT_FILE_PREFIX: &str = "今彩539_";

pub const DEFAULT_FIRST_YEAR: i32 = 2018;
pub const DEFAULT_LAST_YEAR: i32 = 2025;

/// Locators for the corpus sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    data_dir: PathBuf,
    file_prefix: String,
    years: RangeInclusive<i32>,
    /// When set, used verbatim instead of the per-year names
    explicit_paths: Option<Vec<PathBuf>>,
}

impl CorpusConfig {
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            years: DEFAULT_FIRST_YEAR..=DEFAULT_LAST_YEAR,
            explicit_paths: None,
        }
    }

    /// Use an explicit list of files
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            explicit_paths: Some(paths),
            ..Self::new()
        }
    }

    /// Configure the directory holding the yearly files (default: `data`)
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Configure the file name prefix (default: `今彩539_`)
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Configure the span of years to look for (default: 2018..=2025)
    pub fn with_years(mut self, years: RangeInclusive<i32>) -> Self {
        self.years = years;
        self
    }

    /// Every path that may hold draws, in load order
    pub fn source_paths(&self) -> Vec<PathBuf> {
        if let Some(paths) = &self.explicit_paths {
            return paths.clone();
        }
        self.years
            .clone()
            .map(|year| {
                self.data_dir
                    .join(format!("{}{}.csv", self.file_prefix, year))
            })
            .collect()
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::new()
    }
}
