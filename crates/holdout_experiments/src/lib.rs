//! Repeated 50/50 hold-out evaluation with a hyperparameter grid search.
//!
//! For each seed the runner writes a train/test split, calls the solver once
//! per grid configuration, keeps the best-scoring witness, and finally reports
//! per-split and aggregate error/complexity figures.
//!
//! # Quick Start
//!
//! ```no_run
//! use holdout_core::ClingoSolver;
//! use holdout_experiments::{run_configured_experiment, ExperimentConfig, ReportDigest};
//!
//! let config = ExperimentConfig::default();
//! let solver = ClingoSolver::new(&config.solver);
//!
//! let summary = run_configured_experiment(&config, &solver, true)?;
//! if let Some(digest) = ReportDigest::from_records(&summary) {
//!     println!("{digest}");
//! }
//! # Ok::<(), holdout_core::HoldoutError>(())
//! ```
//!
//! # Architecture
//!
//! - [`parameters`]: grid definition and lazy Cartesian product
//! - [`parameter_spaces`]: named grids
//! - [`config`]: experiment configuration record
//! - [`runner`]: split evaluation and the seed loop
//! - [`metrics`]: per-split records
//! - [`export`]: CSV/JSON summaries and best-answer files
//! - [`report`]: console digest

pub mod config;
pub mod export;
pub mod metrics;
pub mod parameter_spaces;
pub mod parameters;
pub mod report;
pub mod runner;

pub use config::ExperimentConfig;
pub use export::{export_to_csv, export_to_json, find_lowest_error, find_most_compact, mean_error};
pub use metrics::{BestCandidate, SummaryRecord};
pub use parameters::{GridParameter, ParameterSpace};
pub use report::{write_report, ReportDigest};
pub use runner::{
    evaluate_split, run_configured_experiment, run_experiment, run_experiment_with_progress,
};
