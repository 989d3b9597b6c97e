//! Invocation contract for the external rule-induction solver.
//!
//! The experiment only talks to the solver through [`Solver`], so tests can
//! swap in a closure while production code spawns `clingo` through
//! [`ClingoSolver`]. A failed or timed-out attempt is an ordinary
//! [`SolverOutcome`] value; nothing here aborts the run.

use std::path::Path;
use std::time::Duration;

use crate::configuration::Configuration;

#[path = "solver/parser.rs"]
mod parser;
#[path = "solver/process.rs"]
mod process;
#[path = "solver/response.rs"]
mod response;

pub use parser::parse_solver_output;
pub use process::{ClingoSolver, ACCEPTED_EXIT_CODES};
pub use response::{SolverResult, Witness};

/// Inputs for one solver call.
#[derive(Debug, Clone, Copy)]
pub struct SolveRequest<'a> {
    pub model: &'a Path,
    pub dataset: &'a Path,
    pub split: &'a Path,
    pub configuration: &'a Configuration,
    pub timeout: Duration,
}

/// What came back from one solver call.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverOutcome {
    Solved(SolverResult),
    TimedOut { elapsed: Duration },
    Failed { reason: String },
}

impl SolverOutcome {
    pub fn into_result(self) -> Option<SolverResult> {
        match self {
            SolverOutcome::Solved(result) => Some(result),
            SolverOutcome::TimedOut { .. } | SolverOutcome::Failed { .. } => None,
        }
    }
}

pub trait Solver {
    fn solve(&self, request: &SolveRequest<'_>) -> SolverOutcome;
}

impl<F> Solver for F
where
    F: Fn(&SolveRequest<'_>) -> SolverOutcome,
{
    fn solve(&self, request: &SolveRequest<'_>) -> SolverOutcome {
        self(request)
    }
}
