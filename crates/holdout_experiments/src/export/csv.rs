use holdout_core::BoxError;

use crate::metrics::SummaryRecord;

pub(crate) fn export_to_csv_impl(
    records: &[SummaryRecord],
    parameter_names: &[&str],
    file: std::fs::File,
) -> Result<(), BoxError> {
    let mut wtr = csv::Writer::from_writer(file);

    let mut header = vec!["split", "seed", "testError", "literals"];
    header.extend_from_slice(parameter_names);
    header.push("runtimeSeconds");
    wtr.write_record(&header)?;

    for record in records {
        let mut row = vec![
            record.split_index.to_string(),
            record.seed.to_string(),
            format!("{:.4}", record.test_error()),
            record.literals().to_string(),
        ];
        row.extend(parameter_names.iter().map(|name| {
            record
                .configuration
                .get(name)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }));
        row.push(format!("{:.3}", record.runtime_seconds));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
