//! Final report: summary files and the console digest.

use std::fmt;

use holdout_core::Result;

use crate::config::ExperimentConfig;
use crate::export::{
    export_to_csv, export_to_json, find_lowest_error, find_most_compact, mean_error,
};
use crate::metrics::SummaryRecord;

/// Aggregate view over the successful splits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportDigest<'a> {
    pub splits: usize,
    pub mean_error: f64,
    pub lowest_error: &'a SummaryRecord,
    pub most_compact: &'a SummaryRecord,
}

impl<'a> ReportDigest<'a> {
    /// `None` when there are no records to summarise.
    pub fn from_records(records: &'a [SummaryRecord]) -> Option<Self> {
        Some(Self {
            splits: records.len(),
            mean_error: mean_error(records)?,
            lowest_error: find_lowest_error(records)?,
            most_compact: find_most_compact(records)?,
        })
    }
}

impl fmt::Display for ReportDigest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Average test error over {} splits: {:.4}",
            self.splits, self.mean_error
        )?;
        writeln!(
            f,
            "Lowest error:  split {} (seed {}) error={:.4} literals={}  {}",
            self.lowest_error.split_index,
            self.lowest_error.seed,
            self.lowest_error.test_error(),
            self.lowest_error.literals(),
            self.lowest_error.configuration
        )?;
        write!(
            f,
            "Most compact:  split {} (seed {}) error={:.4} literals={}  {}",
            self.most_compact.split_index,
            self.most_compact.seed,
            self.most_compact.test_error(),
            self.most_compact.literals(),
            self.most_compact.configuration
        )
    }
}

/// Write the CSV summary (and the JSON summary when configured).
pub fn write_report(config: &ExperimentConfig, records: &[SummaryRecord]) -> Result<()> {
    export_to_csv(records, config.grid.names(), &config.summary_csv)?;
    tracing::info!(path = %config.summary_csv.display(), rows = records.len(), "wrote summary CSV");

    if let Some(json_path) = &config.summary_json {
        export_to_json(records, json_path)?;
        tracing::info!(path = %json_path.display(), "wrote summary JSON");
    }
    Ok(())
}
