use std::fs;
use std::path::PathBuf;

use holdout_experiments::{ExperimentConfig, ParameterSpace};
use tempfile::TempDir;

/// Scratch directory holding a dataset, a seed file and an output folder.
pub struct TestWorkspace {
    pub dir: TempDir,
    pub config: ExperimentConfig,
}

impl TestWorkspace {
    /// Dataset with labeled rows `1..=rows`, plus a non-label attribute per row.
    pub fn with_rows(rows: u64) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let data_file = dir.path().join("data.lp");
        let mut dataset = String::new();
        for row in 1..=rows {
            dataset.push_str(&format!("val({row},a(1),{}).\n", row % 3));
            dataset.push_str(&format!("val({row},a(10),{}).\n", row % 2));
        }
        fs::write(&data_file, dataset).expect("dataset should be written");

        let config = ExperimentConfig {
            solver: PathBuf::from("mock-solver"),
            model_file: dir.path().join("current.lp"),
            data_file,
            seed_file: dir.path().join("seeds.txt"),
            out_dir: dir.path().join("runs"),
            summary_csv: dir.path().join("summary.csv"),
            summary_json: None,
            timeout_secs: 5.0,
            ..ExperimentConfig::default()
        };
        Self { dir, config }
    }

    pub fn with_seeds(self, seeds: &[u64]) -> Self {
        let contents = seeds
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&self.config.seed_file, contents).expect("seed file should be written");
        self
    }

    pub fn with_grid(mut self, grid: ParameterSpace) -> Self {
        self.config.grid = grid;
        self
    }

    pub fn read(&self, path: &std::path::Path) -> String {
        fs::read_to_string(path).expect("file should be readable")
    }
}
