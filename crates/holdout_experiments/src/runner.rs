//! Sequential hold-out evaluation.
//!
//! For every seed the runner materialises one split, searches the whole grid
//! with one solver call per configuration, and keeps the winner under the
//! candidate order from [`holdout_core::scoring`]. Splits are independent:
//! a split where nothing scores is skipped and the run continues.

use std::path::Path;

use holdout_core::{
    load_rows, load_seeds, select_best_witness, BestSoFar, HoldoutError, Result, RowId,
    SolveRequest, Solver, SolverOutcome, Split,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ExperimentConfig;
use crate::export::write_best_answer;
use crate::metrics::{BestCandidate, SummaryRecord};
use crate::report::write_report;

/// Search the grid for one split and return its best candidate.
///
/// Failed, timed-out and unscored solver calls contribute nothing. Returns
/// `None` when no configuration produced a scored witness.
pub fn evaluate_split(
    config: &ExperimentConfig,
    solver: &dyn Solver,
    split_path: &Path,
    progress: Option<&ProgressBar>,
) -> Option<BestCandidate> {
    let timeout = config.timeout();
    let mut best = BestSoFar::new();

    for configuration in config.grid.generate() {
        let request = SolveRequest {
            model: &config.model_file,
            dataset: &config.data_file,
            split: split_path,
            configuration: &configuration,
            timeout,
        };
        let outcome = solver.solve(&request);
        if let Some(progress_bar) = progress {
            progress_bar.inc(1);
        }

        let result = match outcome {
            SolverOutcome::Solved(result) => result,
            SolverOutcome::TimedOut { elapsed } => {
                tracing::warn!(
                    split = %split_path.display(),
                    %configuration,
                    elapsed_secs = elapsed.as_secs_f64(),
                    "solver timed out"
                );
                continue;
            }
            SolverOutcome::Failed { reason } => {
                tracing::warn!(
                    split = %split_path.display(),
                    %configuration,
                    %reason,
                    "solver call failed"
                );
                continue;
            }
        };

        let Some((score, witness)) = select_best_witness(&result) else {
            tracing::debug!(
                split = %split_path.display(),
                %configuration,
                witnesses = result.witness_count(),
                "no scored witness"
            );
            continue;
        };
        tracing::debug!(%configuration, %score, "best witness for configuration");

        best.offer_with(score, || BestCandidate {
            score,
            configuration: configuration.clone(),
            witness: witness.clone(),
            runtime: result.runtime,
        });
    }

    best.into_best().map(|(_, candidate)| candidate)
}

/// Run every split with a progress bar on stderr.
pub fn run_experiment(
    config: &ExperimentConfig,
    solver: &dyn Solver,
    seeds: &[u64],
    rows: &[RowId],
) -> Result<Vec<SummaryRecord>> {
    run_experiment_with_progress(config, solver, seeds, rows, true)
}

/// Run every split in seed order and collect one record per successful split.
///
/// Split fact files and best-answer artifacts are written as the run goes.
/// Fails with [`HoldoutError::NoSuccessfulSplits`] when no split produced a
/// candidate.
pub fn run_experiment_with_progress(
    config: &ExperimentConfig,
    solver: &dyn Solver,
    seeds: &[u64],
    rows: &[RowId],
    show_progress: bool,
) -> Result<Vec<SummaryRecord>> {
    let total = seeds.len() * config.grid.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut summary = Vec::with_capacity(seeds.len());
    for (idx, &seed) in seeds.iter().enumerate() {
        let split_index = idx + 1;
        let split = Split::generate(rows, seed);
        let split_path = config.split_path(split_index);
        split.write(&split_path)?;
        tracing::debug!(
            split = split_index,
            seed,
            train = split.train.len(),
            test = split.test.len(),
            "wrote split"
        );

        let Some(candidate) = evaluate_split(config, solver, &split_path, pb.as_ref()) else {
            tracing::warn!(split = split_index, seed, "no model found for split");
            announce(pb.as_ref(), format!("✖ Split {split_index}: no model found."));
            continue;
        };

        write_best_answer(config.best_answer_path(split_index), &candidate)?;
        let record = SummaryRecord::from_candidate(split_index, seed, &candidate);
        announce(
            pb.as_ref(),
            format!(
                "Split {split_index}: error={:.4}  literals={}  {}",
                record.test_error(),
                record.literals(),
                record.configuration
            ),
        );
        summary.push(record);
    }

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    if summary.is_empty() {
        return Err(HoldoutError::NoSuccessfulSplits {
            splits: seeds.len(),
        });
    }
    Ok(summary)
}

/// Load inputs from `config`, run the experiment and write the summary files.
///
/// Nothing is written to the summary paths unless at least one split succeeded.
pub fn run_configured_experiment(
    config: &ExperimentConfig,
    solver: &dyn Solver,
    show_progress: bool,
) -> Result<Vec<SummaryRecord>> {
    config.validate()?;
    let seeds = load_seeds(&config.seed_file)?;
    let rows = load_rows(&config.data_file, &config.label_attribute)?;
    tracing::info!(
        splits = seeds.len(),
        rows = rows.len(),
        configurations = config.grid.len(),
        "starting hold-out evaluation"
    );

    let summary = run_experiment_with_progress(config, solver, &seeds, &rows, show_progress)?;
    write_report(config, &summary)?;
    Ok(summary)
}

fn announce(progress: Option<&ProgressBar>, line: String) {
    match progress {
        Some(progress_bar) => progress_bar.println(line),
        None => println!("{line}"),
    }
}
