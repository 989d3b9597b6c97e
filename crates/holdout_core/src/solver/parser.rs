use super::response::{SolverOutput, Witness};

/// Parse the solver's JSON document (`Call[].Witnesses[].Value[]`) into
/// witness groups. Missing arrays count as empty.
pub fn parse_solver_output(stdout: &str) -> Result<Vec<Vec<Witness>>, serde_json::Error> {
    let output: SolverOutput = serde_json::from_str(stdout)?;
    Ok(output
        .calls
        .into_iter()
        .map(|call| {
            call.witnesses
                .into_iter()
                .map(|witness| Witness {
                    atoms: witness.value,
                })
                .collect()
        })
        .collect())
}
