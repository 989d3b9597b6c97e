//! Witness scoring and the best-candidate order.
//!
//! A witness is scored by its test error (read from `error_test_pp10k(V)`,
//! `V / 10000`) and the number of rule-body literals it contains. Candidates
//! are ordered by error, then literal count. The same [`BestSoFar`] fold picks
//! the winning witness inside one solver result and the winning configuration
//! inside one split.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::solver::{SolverResult, Witness};

pub const ERROR_ATOM_PREFIX: &str = "error_test_pp10k(";
pub const ERROR_SCALE: u32 = 10_000;
const LITERAL_ATOM_PREFIXES: [&str; 2] = ["default_body(", "exception_body("];

/// `(test error, literal count)` for one witness.
///
/// Field order matters: the derived `Ord` compares error first and breaks
/// ties by literal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateScore {
    error_pp10k: u32,
    literals: usize,
}

impl CandidateScore {
    /// Starting point of every fold: error 1.0 with unbounded literals.
    pub const WORST: Self = Self {
        error_pp10k: ERROR_SCALE,
        literals: usize::MAX,
    };

    pub const fn new(error_pp10k: u32, literals: usize) -> Self {
        Self {
            error_pp10k,
            literals,
        }
    }

    pub fn error_pp10k(&self) -> u32 {
        self.error_pp10k
    }

    pub fn literals(&self) -> usize {
        self.literals
    }

    pub fn test_error(&self) -> f64 {
        f64::from(self.error_pp10k) / f64::from(ERROR_SCALE)
    }

    /// Strictly better: lower error, or equal error with fewer literals.
    pub fn beats(&self, other: &Self) -> bool {
        self < other
    }
}

impl fmt::Display for CandidateScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error={:.4} literals={}", self.test_error(), self.literals)
    }
}

impl Serialize for CandidateScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CandidateScore", 2)?;
        state.serialize_field("test_error", &self.test_error())?;
        state.serialize_field("literals", &self.literals)?;
        state.end()
    }
}

/// Score one witness. Returns `None` when it carries no well-formed error atom,
/// whatever its literal count.
pub fn score_witness<S: AsRef<str>>(atoms: &[S]) -> Option<CandidateScore> {
    let mut error = None;
    let mut literals = 0;
    for atom in atoms {
        let atom = atom.as_ref();
        if let Some(payload) = atom.strip_prefix(ERROR_ATOM_PREFIX) {
            if let Some(value) = payload.strip_suffix(')').and_then(|v| v.parse().ok()) {
                error = Some(value);
            }
        } else if LITERAL_ATOM_PREFIXES
            .iter()
            .any(|prefix| atom.starts_with(prefix))
        {
            literals += 1;
        }
    }
    error.map(|error_pp10k| CandidateScore::new(error_pp10k, literals))
}

/// Running minimum under the candidate order. Earlier offers win exact ties.
#[derive(Debug, Clone)]
pub struct BestSoFar<T> {
    score: CandidateScore,
    item: Option<T>,
}

impl<T> Default for BestSoFar<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BestSoFar<T> {
    pub fn new() -> Self {
        Self {
            score: CandidateScore::WORST,
            item: None,
        }
    }

    /// Keep `item` if `score` strictly beats the current best.
    pub fn offer(&mut self, score: CandidateScore, item: T) -> bool {
        self.offer_with(score, || item)
    }

    /// Like [`offer`](Self::offer) but only builds the item when it wins.
    pub fn offer_with(&mut self, score: CandidateScore, make: impl FnOnce() -> T) -> bool {
        if !score.beats(&self.score) {
            return false;
        }
        self.score = score;
        self.item = Some(make());
        true
    }

    pub fn best(&self) -> Option<(CandidateScore, &T)> {
        self.item.as_ref().map(|item| (self.score, item))
    }

    pub fn into_best(self) -> Option<(CandidateScore, T)> {
        let score = self.score;
        self.item.map(|item| (score, item))
    }
}

/// Pick the best scored witness across every call group of a result.
pub fn select_best_witness(result: &SolverResult) -> Option<(CandidateScore, &Witness)> {
    let mut best = BestSoFar::new();
    for witness in result.witnesses() {
        if let Some(score) = score_witness(&witness.atoms) {
            best.offer(score, witness);
        }
    }
    best.into_best()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn witness(atoms: &[&str]) -> Witness {
        Witness {
            atoms: atoms.iter().map(|atom| atom.to_string()).collect(),
        }
    }

    fn result(groups: Vec<Vec<Witness>>) -> SolverResult {
        SolverResult {
            calls: groups,
            exit_code: Some(30),
            runtime: Duration::from_millis(5),
        }
    }

    #[test]
    fn score_reads_error_and_counts_body_literals() {
        let score = score_witness(&[
            "error_test_pp10k(700)",
            "default_body(1,a(3),1)",
            "default_body(1,a(4),0)",
            "exception_body(1,1,a(7),1)",
            "default(1)",
            "body_count(3)",
        ])
        .unwrap();

        assert_eq!(score.error_pp10k(), 700);
        assert_eq!(score.literals(), 3);
        assert!((score.test_error() - 0.07).abs() < 1e-12);
    }

    #[test]
    fn witness_without_error_atom_has_no_score() {
        assert_eq!(
            score_witness(&["default_body(1,a(3),1)", "exception_body(1,1,a(2),0)"]),
            None
        );
        assert_eq!(score_witness::<&str>(&[]), None);
    }

    #[test]
    fn malformed_error_payload_is_ignored() {
        assert_eq!(score_witness(&["error_test_pp10k(abc)"]), None);
        assert_eq!(
            score_witness(&["error_test_pp10k(-5)", "error_test_pp10k(120)"]),
            Some(CandidateScore::new(120, 0))
        );
    }

    #[test]
    fn lower_error_wins() {
        let result = result(vec![vec![
            witness(&["error_test_pp10k(700)", "default_body(1,a(1),1)"]),
            witness(&[
                "error_test_pp10k(500)",
                "default_body(1,a(1),1)",
                "default_body(1,a(2),1)",
            ]),
        ]]);
        let picked = select_best_witness(&result).unwrap();

        assert_eq!(picked.0.error_pp10k(), 500);
    }

    #[test]
    fn equal_error_prefers_fewer_literals() {
        let five = [
            "error_test_pp10k(600)",
            "default_body(1,a(1),1)",
            "default_body(1,a(2),1)",
            "default_body(2,a(3),1)",
            "exception_body(1,1,a(4),0)",
            "exception_body(2,1,a(5),0)",
        ];
        let three = [
            "error_test_pp10k(600)",
            "default_body(1,a(1),1)",
            "default_body(2,a(3),1)",
            "exception_body(1,1,a(4),0)",
        ];
        let result = result(vec![vec![witness(&five), witness(&three)]]);
        let picked = select_best_witness(&result).unwrap();

        assert_eq!(picked.0, CandidateScore::new(600, 3));
    }

    #[test]
    fn unscored_witnesses_are_skipped_across_groups() {
        let groups = result(vec![
            vec![witness(&["default_body(1,a(1),1)"])],
            vec![],
            vec![witness(&["error_test_pp10k(900)"])],
        ]);
        let picked = select_best_witness(&groups).unwrap();

        assert_eq!(picked.0, CandidateScore::new(900, 0));
        assert_eq!(select_best_witness(&result(vec![])), None);
    }

    #[test]
    fn first_offer_wins_exact_ties() {
        let mut best = BestSoFar::new();
        assert!(best.offer(CandidateScore::new(100, 2), "first"));
        assert!(!best.offer(CandidateScore::new(100, 2), "second"));
        assert!(!best.offer(CandidateScore::new(100, 3), "third"));
        assert!(best.offer(CandidateScore::new(100, 1), "fourth"));

        assert_eq!(best.best(), Some((CandidateScore::new(100, 1), &"fourth")));
    }

    #[test]
    fn sentinel_rejects_errors_above_one() {
        let mut best = BestSoFar::new();
        assert!(!best.offer(CandidateScore::new(ERROR_SCALE + 1, 0), ()));
        assert!(best.offer(CandidateScore::new(ERROR_SCALE, 12), ()));
    }
}
