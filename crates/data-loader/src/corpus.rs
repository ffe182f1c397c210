//! Building a DrawCorpus from the configured draw files.
//!
//! Steps:
//! 1. Keep only the locators that exist on disk
//! 2. Parse the surviving files in parallel
//! 3. Concatenate in locator order and sort by date

use crate::error::{DataLoadError, Result};
use crate::parser::{self, ParsedFile};
use crate::types::DrawCorpus;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of one corpus load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files_read: Vec<PathBuf>,
    pub files_missing: Vec<PathBuf>,
    pub records_loaded: usize,
    pub rows_bad_date: usize,
    pub rows_invalid: usize,
}

impl LoadReport {
    pub fn rows_skipped(&self) -> usize {
        self.rows_bad_date + self.rows_invalid
    }
}

impl DrawCorpus {
    /// Load every draw file that exists among `sources`
    ///
    /// Missing files are skipped. Fails with `DataUnavailable` only when
    /// none of them exist.
    pub fn load(sources: &[PathBuf]) -> Result<Self> {
        Self::load_with_report(sources).map(|(corpus, _)| corpus)
    }

    /// Same as [`DrawCorpus::load`], also returning what was read and skipped
    pub fn load_with_report(sources: &[PathBuf]) -> Result<(Self, LoadReport)> {
        let (existing, missing): (Vec<&PathBuf>, Vec<&PathBuf>) =
            sources.iter().partition(|p| p.is_file());

        for path in &missing {
            debug!("Draw source {} not found, skipping", path.display());
        }

        if existing.is_empty() {
            return Err(DataLoadError::DataUnavailable {
                searched: sources.len(),
            });
        }

        // Files are independent; collect() keeps locator order
        let parsed: Vec<ParsedFile> = existing
            .par_iter()
            .map(|path| parse_one(path))
            .collect::<Result<Vec<_>>>()?;

        let mut report = LoadReport {
            files_read: existing.iter().map(|p| p.to_path_buf()).collect(),
            files_missing: missing.iter().map(|p| p.to_path_buf()).collect(),
            ..LoadReport::default()
        };

        let mut records = Vec::new();
        for file in parsed {
            report.rows_bad_date += file.bad_dates;
            report.rows_invalid += file.bad_rows;
            records.extend(file.records);
        }
        report.records_loaded = records.len();

        let corpus = DrawCorpus::from_records(records);

        info!(
            "Loaded {} draws from {} files ({} missing, {} rows skipped)",
            report.records_loaded,
            report.files_read.len(),
            report.files_missing.len(),
            report.rows_skipped()
        );

        Ok((corpus, report))
    }
}

fn parse_one(path: &Path) -> Result<ParsedFile> {
    let parsed = parser::parse_draws(path)?;
    debug!(
        "Parsed {} draws from {} ({} bad dates, {} invalid rows)",
        parsed.records.len(),
        path.display(),
        parsed.bad_dates,
        parsed.bad_rows
    );
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_no_sources_is_data_unavailable() {
        let dir = TempDir::new().unwrap();
        let sources = vec![dir.path().join("a.csv"), dir.path().join("b.csv")];

        let err = DrawCorpus::load(&sources).unwrap_err();
        assert!(matches!(err, DataLoadError::DataUnavailable { searched: 2 }));

        let err = DrawCorpus::load(&[]).unwrap_err();
        assert!(matches!(err, DataLoadError::DataUnavailable { searched: 0 }));
    }

    #[test]
    fn test_missing_sources_are_skipped() {
        let dir = TempDir::new().unwrap();
        let present = write(
            &dir,
            "2024.csv",
            "date,n1,n2,n3,n4,n5\n2024-01-02,1,2,3,4,5\n2024-01-01,6,7,8,9,10\n",
        );
        let absent = dir.path().join("2023.csv");

        let (corpus, report) =
            DrawCorpus::load_with_report(&[absent.clone(), present.clone()]).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(report.files_read, vec![present]);
        assert_eq!(report.files_missing, vec![absent]);
        // Sorted chronologically regardless of file order
        assert_eq!(corpus.records()[0].numbers(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_overlapping_sources_keep_duplicates() {
        let dir = TempDir::new().unwrap();
        let body = "date,n1,n2,n3,n4,n5\n2024-01-02,1,2,3,4,5\n";
        let a = write(&dir, "a.csv", body);
        let b = write(&dir, "b.csv", body);

        let corpus = DrawCorpus::load(&[a, b]).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_report_counts_skipped_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "mixed.csv",
            "date,n1,n2,n3,n4,n5\nbad,1,2,3,4,5\n2024-01-02,1,2,3,4,99\n2024-01-03,1,2,3,4,5\n",
        );

        let (corpus, report) = DrawCorpus::load_with_report(&[path]).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(report.rows_bad_date, 1);
        assert_eq!(report.rows_invalid, 1);
        assert_eq!(report.rows_skipped(), 2);
    }

    #[test]
    fn test_existing_but_empty_source_gives_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.csv", "date,n1,n2,n3,n4,n5\n");

        let corpus = DrawCorpus::load(&[path]).unwrap();
        assert!(corpus.is_empty());
    }
}
