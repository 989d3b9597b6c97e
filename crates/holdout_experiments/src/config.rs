//! Experiment configuration record.
//!
//! Every path, the solver binary, the timeout and the grid travel together in
//! an [`ExperimentConfig`] handed to the runner, so runs never depend on
//! process-wide state. The record can be loaded from JSON; omitted fields take
//! their defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use holdout_core::{HoldoutError, Result, DEFAULT_LABEL_ATTRIBUTE};
use serde::{Deserialize, Serialize};

use crate::parameter_spaces::default_space;
use crate::parameters::ParameterSpace;

pub const DEFAULT_TIMEOUT_SECS: f64 = 600.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Solver binary, looked up on `PATH` when not absolute.
    pub solver: PathBuf,
    pub model_file: PathBuf,
    pub data_file: PathBuf,
    pub seed_file: PathBuf,
    /// Directory receiving split fact files and best-answer artifacts.
    pub out_dir: PathBuf,
    pub summary_csv: PathBuf,
    pub summary_json: Option<PathBuf>,
    pub label_attribute: String,
    /// Wall-clock budget for one solver call.
    pub timeout_secs: f64,
    pub grid: ParameterSpace,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            solver: PathBuf::from("clingo"),
            model_file: PathBuf::from("current.lp"),
            data_file: PathBuf::from("data.lp"),
            seed_file: PathBuf::from("seeds.txt"),
            out_dir: PathBuf::from("runs"),
            summary_csv: PathBuf::from("holdout_summary.csv"),
            summary_json: None,
            label_attribute: DEFAULT_LABEL_ATTRIBUTE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            grid: default_space(),
        }
    }
}

impl ExperimentConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| HoldoutError::io(path, source))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| HoldoutError::Config(format!("{}: {err}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs <= 0.0 || Duration::try_from_secs_f64(self.timeout_secs).is_err() {
            return Err(HoldoutError::Config(format!(
                "timeout_secs must be a positive number of seconds, got {}",
                self.timeout_secs
            )));
        }
        if self.label_attribute.trim().is_empty() {
            return Err(HoldoutError::Config(
                "label_attribute must not be empty".to_string(),
            ));
        }
        self.grid.validate()
    }

    /// Per-call budget. Values [`validate`](Self::validate) would reject
    /// saturate to [`Duration::MAX`].
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::MAX)
    }

    /// Fact file for split `index` (1-based).
    pub fn split_path(&self, index: usize) -> PathBuf {
        self.out_dir.join(format!("split{index}.lp"))
    }

    /// Best-answer artifact for split `index` (1-based).
    pub fn best_answer_path(&self, index: usize) -> PathBuf {
        self.out_dir.join(format!("split{index}_best.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_reference_layout() {
        let config = ExperimentConfig::default();
        assert_eq!(config.grid.len(), 12);
        assert_eq!(config.split_path(3), PathBuf::from("runs/split3.lp"));
        assert_eq!(
            config.best_answer_path(3),
            PathBuf::from("runs/split3_best.txt")
        );
        assert_eq!(config.timeout(), Duration::from_secs(600));
        config.validate().unwrap();
    }

    #[test]
    fn oversized_timeout_is_rejected_without_panicking() {
        let config = ExperimentConfig {
            timeout_secs: 1e20,
            ..ExperimentConfig::default()
        };
        assert!(matches!(config.validate(), Err(HoldoutError::Config(_))));
        assert_eq!(config.timeout(), Duration::MAX);

        for timeout_secs in [f64::NAN, f64::INFINITY, -1.0] {
            let config = ExperimentConfig {
                timeout_secs,
                ..ExperimentConfig::default()
            };
            assert!(config.validate().is_err(), "{timeout_secs} accepted");
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experiment.json");
        std::fs::write(
            &path,
            r#"{
                "data_file": "data-cancer.lp",
                "timeout_secs": 30,
                "grid": [{"name": "maxD", "values": [3, 4]}]
            }"#,
        )
        .unwrap();

        let config = ExperimentConfig::from_json_file(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("data-cancer.lp"));
        assert_eq!(config.model_file, PathBuf::from("current.lp"));
        assert_eq!(config.timeout_secs, 30.0);
        assert_eq!(config.grid.len(), 2);
    }

    #[test]
    fn unknown_fields_and_bad_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("experiment.json");

        std::fs::write(&path, r#"{"data": "x.lp"}"#).unwrap();
        assert!(matches!(
            ExperimentConfig::from_json_file(&path),
            Err(HoldoutError::Config(_))
        ));

        std::fs::write(&path, r#"{"timeout_secs": 0}"#).unwrap();
        assert!(matches!(
            ExperimentConfig::from_json_file(&path),
            Err(HoldoutError::Config(_))
        ));

        std::fs::write(&path, r#"{"timeout_secs": 1e20}"#).unwrap();
        assert!(matches!(
            ExperimentConfig::from_json_file(&path),
            Err(HoldoutError::Config(_))
        ));

        std::fs::write(&path, r#"{"grid": []}"#).unwrap();
        assert!(ExperimentConfig::from_json_file(&path).is_err());
    }
}
