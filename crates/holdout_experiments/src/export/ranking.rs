use crate::metrics::SummaryRecord;

/// Record with the lowest test error; fewer literals, then the earlier split,
/// break ties.
pub fn find_lowest_error(records: &[SummaryRecord]) -> Option<&SummaryRecord> {
    records.iter().min_by_key(|record| record.score)
}

/// Record with the fewest literals; lower error, then the earlier split,
/// break ties.
pub fn find_most_compact(records: &[SummaryRecord]) -> Option<&SummaryRecord> {
    records
        .iter()
        .min_by_key(|record| (record.literals(), record.score.error_pp10k()))
}

/// Arithmetic mean of the test error over exactly the given records.
pub fn mean_error(records: &[SummaryRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: f64 = records.iter().map(SummaryRecord::test_error).sum();
    Some(total / records.len() as f64)
}
