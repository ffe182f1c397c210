//! Candidate types shared by the analyzers and the downstream pipeline.

use data_loader::Number;
use serde::Serialize;
use std::fmt;

/// Which heuristic proposed a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnalysisMethod {
    /// Hottest numbers inside the hottest zones
    ZoneDistribution,
    /// Numbers ending in the most common last digits
    TailDigit,
    /// Most repeated value in each draw position
    ColumnRepeat,
}

impl AnalysisMethod {
    /// Every method in pipeline order
    pub const ALL: [AnalysisMethod; 3] = [
        AnalysisMethod::ZoneDistribution,
        AnalysisMethod::TailDigit,
        AnalysisMethod::ColumnRepeat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnalysisMethod::ZoneDistribution => "zone-distribution",
            AnalysisMethod::TailDigit => "tail-digit",
            AnalysisMethod::ColumnRepeat => "column-repeat",
        }
    }
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A number proposed by one analyzer.
///
/// The same number proposed by two analyzers yields two candidates; each one
/// counts as a vote when the candidates are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub number: Number,
    pub method: AnalysisMethod,
}

impl Candidate {
    pub fn new(number: Number, method: AnalysisMethod) -> Self {
        Self { number, method }
    }
}
