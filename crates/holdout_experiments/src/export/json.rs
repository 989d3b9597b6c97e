use holdout_core::BoxError;

use crate::metrics::SummaryRecord;

pub(crate) fn export_to_json_impl(
    records: &[SummaryRecord],
    file: std::fs::File,
) -> Result<(), BoxError> {
    serde_json::to_writer_pretty(file, records)?;
    Ok(())
}
