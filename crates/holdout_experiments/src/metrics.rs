//! Per-split outcome records.

use std::time::Duration;

use holdout_core::{CandidateScore, Configuration, Witness};
use serde::Serialize;

/// Winning candidate of one split: the best witness of the best configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BestCandidate {
    pub score: CandidateScore,
    pub configuration: Configuration,
    pub witness: Witness,
    /// Wall-clock time of the solver call that produced `witness`.
    pub runtime: Duration,
}

/// One row of the experiment summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    /// 1-based position of the seed in the seed list.
    pub split_index: usize,
    pub seed: u64,
    #[serde(flatten)]
    pub score: CandidateScore,
    pub configuration: Configuration,
    pub runtime_seconds: f64,
}

impl SummaryRecord {
    pub fn from_candidate(split_index: usize, seed: u64, candidate: &BestCandidate) -> Self {
        Self {
            split_index,
            seed,
            score: candidate.score,
            configuration: candidate.configuration.clone(),
            runtime_seconds: candidate.runtime.as_secs_f64(),
        }
    }

    pub fn test_error(&self) -> f64 {
        self.score.test_error()
    }

    pub fn literals(&self) -> usize {
        self.score.literals()
    }
}
