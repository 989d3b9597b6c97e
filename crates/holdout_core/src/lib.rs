//! Core building blocks for repeated hold-out evaluation of an external
//! rule-induction solver.
//!
//! - [`seeds`]: reproducible seed list backed by a text file
//! - [`rows`]: labeled-row universe extracted from the dataset encoding
//! - [`split`]: deterministic 50/50 train/test partitions and their fact files
//! - [`configuration`]: one hyperparameter assignment passed to the solver
//! - [`solver`]: invocation contract for the solver subprocess
//! - [`scoring`]: witness scoring and the shared best-candidate order

pub mod configuration;
pub mod error;
pub mod rows;
pub mod scoring;
pub mod seeds;
pub mod solver;
pub mod split;

pub use configuration::{Configuration, ParamValue};
pub use error::{BoxError, HoldoutError, Result};
pub use rows::{load_rows, RowId, DEFAULT_LABEL_ATTRIBUTE};
pub use scoring::{score_witness, select_best_witness, BestSoFar, CandidateScore};
pub use seeds::load_seeds;
pub use solver::{ClingoSolver, SolveRequest, Solver, SolverOutcome, SolverResult, Witness};
pub use split::Split;
