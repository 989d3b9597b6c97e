//! Result export: summary tables and per-split best answers.

use std::path::Path;

use holdout_core::Result;

use crate::metrics::{BestCandidate, SummaryRecord};

#[path = "export/answers.rs"]
mod answers;
#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/ranking.rs"]
mod ranking;
#[path = "export/writer_utils.rs"]
mod writer_utils;

pub use ranking::{find_lowest_error, find_most_compact, mean_error};

/// Export the summary as CSV.
///
/// Columns are `split, seed, testError, literals`, one column per name in
/// `parameter_names` (in that order), then `runtimeSeconds`. The error is
/// printed with 4 decimals.
///
/// # Errors
///
/// Returns an error if `records` is empty or the file cannot be written.
pub fn export_to_csv<'a>(
    records: &[SummaryRecord],
    parameter_names: impl IntoIterator<Item = &'a str>,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    writer_utils::ensure_not_empty(records, path)?;
    let file = writer_utils::create_output_file(path)?;
    let names: Vec<&str> = parameter_names.into_iter().collect();
    csv::export_to_csv_impl(records, &names, file)
        .map_err(|err| writer_utils::export_error(path, err))
}

/// Export the summary as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if `records` is empty or the file cannot be written.
pub fn export_to_json(records: &[SummaryRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    writer_utils::ensure_not_empty(records, path)?;
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(records, file)
        .map_err(|err| writer_utils::export_error(path, err))
}

/// Persist the winning witness of a split: a `%` comment line with the solver
/// runtime, then one atom per line in solver order.
pub fn write_best_answer(path: impl AsRef<Path>, candidate: &BestCandidate) -> Result<()> {
    let path = path.as_ref();
    let file = writer_utils::create_output_file(path)?;
    answers::write_best_answer_impl(candidate, file)
        .map_err(|err| writer_utils::export_error(path, err))
}
