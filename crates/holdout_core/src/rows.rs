//! Row universe extraction from the dataset encoding.
//!
//! A row belongs to the universe when the dataset contains a fact
//! `val(<row>,<label>,0).` or `val(<row>,<label>,1).` for the label attribute.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{HoldoutError, Result};

pub type RowId = u64;

/// Label attribute term used by the breast-cancer encoding.
pub const DEFAULT_LABEL_ATTRIBUTE: &str = "a(10)";

/// Read the dataset and collect every labeled row in file order.
///
/// Fails with [`HoldoutError::NoRows`] when nothing matches, which usually
/// means the label attribute does not exist in this dataset.
pub fn load_rows(path: impl AsRef<Path>, label: &str) -> Result<Vec<RowId>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| HoldoutError::io(path, source))?;
    let rows = parse_rows(&contents, label);
    if rows.is_empty() {
        return Err(HoldoutError::NoRows {
            path: path.to_path_buf(),
            label: label.to_string(),
        });
    }
    tracing::info!(path = %path.display(), rows = rows.len(), "loaded row universe");
    Ok(rows)
}

/// Collect labeled rows from dataset text. Duplicate label facts for the same
/// row are counted once.
pub fn parse_rows(contents: &str, label: &str) -> Vec<RowId> {
    let mut seen = HashSet::new();
    contents
        .lines()
        .filter_map(|line| parse_label_fact(line.trim_start(), label))
        .filter(|row| seen.insert(*row))
        .collect()
}

fn parse_label_fact(line: &str, label: &str) -> Option<RowId> {
    let rest = line.strip_prefix("val(")?;
    let (row, rest) = rest.split_once(',')?;
    if row.is_empty() || !row.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rest = rest.strip_prefix(label)?.strip_prefix(',')?;
    let rest = rest
        .strip_prefix('0')
        .or_else(|| rest.strip_prefix('1'))?;
    if !rest.starts_with(").") {
        return None;
    }
    row.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DATASET: &str = "\
val(1,a(1),3).
val(1,a(10),0).
val(2,a(10),1).
val(3,a(10),2).
val(4,a(9),1).
  val(5,a(10),1).
% val(6,a(10),1).
val(7,a(100),1).
val(2,a(10),1).
";

    #[test]
    fn collects_binary_label_facts_only() {
        assert_eq!(parse_rows(DATASET, "a(10)"), vec![1, 2, 5]);
    }

    #[test]
    fn label_attribute_is_configurable() {
        assert_eq!(parse_rows(DATASET, "a(9)"), vec![4]);
    }

    #[test]
    fn empty_universe_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.lp");
        fs::write(&path, "val(1,a(3),0).\n").unwrap();

        match load_rows(&path, DEFAULT_LABEL_ATTRIBUTE) {
            Err(HoldoutError::NoRows { label, .. }) => assert_eq!(label, "a(10)"),
            other => panic!("expected NoRows, got {other:?}"),
        }
    }

    #[test]
    fn missing_dataset_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load_rows(dir.path().join("absent.lp"), DEFAULT_LABEL_ATTRIBUTE);
        assert!(matches!(result, Err(HoldoutError::Io { .. })));
    }
}
