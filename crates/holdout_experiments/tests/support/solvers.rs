use std::cell::RefCell;
use std::time::Duration;

use holdout_core::{Configuration, SolveRequest, Solver, SolverOutcome, SolverResult, Witness};

/// Witness with the given error atom value and number of body literals.
pub fn witness(error_pp10k: u32, literals: usize) -> Witness {
    let mut atoms = vec![format!("error_test_pp10k({error_pp10k})")];
    atoms.extend((0..literals).map(|idx| format!("default_body(1,a({idx}),1)")));
    Witness { atoms }
}

pub fn solved(witnesses: Vec<Witness>, runtime: Duration) -> SolverOutcome {
    SolverOutcome::Solved(SolverResult {
        calls: vec![witnesses],
        exit_code: Some(30),
        runtime,
    })
}

/// Always answers with a single witness of fixed score.
pub struct ConstantSolver {
    pub error_pp10k: u32,
    pub literals: usize,
    pub runtime: Duration,
}

impl Solver for ConstantSolver {
    fn solve(&self, _request: &SolveRequest<'_>) -> SolverOutcome {
        solved(vec![witness(self.error_pp10k, self.literals)], self.runtime)
    }
}

/// Every call times out.
pub struct TimeoutSolver;

impl Solver for TimeoutSolver {
    fn solve(&self, request: &SolveRequest<'_>) -> SolverOutcome {
        SolverOutcome::TimedOut {
            elapsed: request.timeout,
        }
    }
}

/// Wraps another solver and records the configurations it was called with.
pub struct RecordingSolver<S> {
    pub inner: S,
    pub calls: RefCell<Vec<Configuration>>,
}

impl<S: Solver> RecordingSolver<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Configuration> {
        self.calls.borrow().clone()
    }
}

impl<S: Solver> Solver for RecordingSolver<S> {
    fn solve(&self, request: &SolveRequest<'_>) -> SolverOutcome {
        self.calls.borrow_mut().push(request.configuration.clone());
        self.inner.solve(request)
    }
}

/// Integer value of a grid constant, panicking if the test grid lacks it.
pub fn int_param(configuration: &Configuration, name: &str) -> i64 {
    match configuration.get(name) {
        Some(holdout_core::ParamValue::Int(value)) => *value,
        other => panic!("expected integer `{name}`, got {other:?}"),
    }
}
