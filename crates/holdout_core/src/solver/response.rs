use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One answer set: the atoms exactly as the solver printed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Witness {
    pub atoms: Vec<String>,
}

/// Parsed output of a successful solver call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolverResult {
    /// Witnesses grouped by solver call, in output order.
    pub calls: Vec<Vec<Witness>>,
    pub exit_code: Option<i32>,
    pub runtime: Duration,
}

impl SolverResult {
    pub fn witnesses(&self) -> impl Iterator<Item = &Witness> {
        self.calls.iter().flatten()
    }

    pub fn witness_count(&self) -> usize {
        self.calls.iter().map(Vec::len).sum()
    }
}

#[derive(Deserialize)]
pub(super) struct SolverOutput {
    #[serde(rename = "Call", default)]
    pub(super) calls: Vec<SolverCall>,
}

#[derive(Deserialize)]
pub(super) struct SolverCall {
    #[serde(rename = "Witnesses", default)]
    pub(super) witnesses: Vec<SolverWitness>,
}

#[derive(Deserialize)]
pub(super) struct SolverWitness {
    #[serde(rename = "Value", default)]
    pub(super) value: Vec<String>,
}
