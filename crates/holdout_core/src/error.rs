//! Error type shared by the hold-out crates.
//!
//! Only startup and whole-run failures are errors. A single solver attempt that
//! times out or returns garbage is reported through
//! [`SolverOutcome`](crate::solver::SolverOutcome) instead.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HoldoutError>;

/// Underlying cause of an export failure (csv, JSON or plain I/O).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum HoldoutError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed `{token}` in {}", .path.display())]
    InvalidSeed { path: PathBuf, token: String },
    #[error("no rows found in {} (is `{label}` the label attribute?)", .path.display())]
    NoRows { path: PathBuf, label: String },
    #[error(
        "none of the {splits} splits produced a candidate; check the solver version and dataset"
    )]
    NoSuccessfulSplits { splits: usize },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to export {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl HoldoutError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn export(path: impl AsRef<Path>, source: impl Into<BoxError>) -> Self {
        Self::Export {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }
}

/// Create the parent directory of `path` when it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| HoldoutError::io(parent, source))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn export_errors_keep_their_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let err = HoldoutError::export("summary.csv", cause);

        assert_eq!(err.to_string(), "failed to export summary.csv: disk full");
        let source = err.source().expect("export error should expose its cause");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }
}
