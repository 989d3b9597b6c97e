use std::io::{BufWriter, Write};

use holdout_core::BoxError;

use crate::metrics::BestCandidate;

pub(crate) fn write_best_answer_impl(
    candidate: &BestCandidate,
    file: std::fs::File,
) -> Result<(), BoxError> {
    let mut out = BufWriter::new(file);
    writeln!(out, "% runtime_seconds={:.3}", candidate.runtime.as_secs_f64())?;
    for atom in &candidate.witness.atoms {
        writeln!(out, "{atom}")?;
    }
    out.flush()?;
    Ok(())
}
