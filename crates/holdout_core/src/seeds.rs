//! Seed list persisted as whitespace-separated integers.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ensure_parent_dir, HoldoutError, Result};

/// Number of seeds synthesised when the seed file is missing or blank.
pub const DEFAULT_SEED_COUNT: u64 = 10;

/// Load the seed list, creating `0..DEFAULT_SEED_COUNT` on first use.
///
/// A missing or whitespace-only file is replaced by the default list, so a
/// second call on the same path returns the same seeds.
pub fn load_seeds(path: impl AsRef<Path>) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(source) => return Err(HoldoutError::io(path, source)),
    };

    if contents.trim().is_empty() {
        let seeds: Vec<u64> = (0..DEFAULT_SEED_COUNT).collect();
        write_seeds(path, &seeds)?;
        tracing::info!(
            path = %path.display(),
            count = seeds.len(),
            "initialised default seed file"
        );
        return Ok(seeds);
    }

    parse_seeds(path, &contents)
}

/// Write one seed per line.
pub fn write_seeds(path: impl AsRef<Path>, seeds: &[u64]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let mut contents = seeds
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    contents.push('\n');
    fs::write(path, contents).map_err(|source| HoldoutError::io(path, source))
}

fn parse_seeds(path: &Path, contents: &str) -> Result<Vec<u64>> {
    contents
        .split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|_| HoldoutError::InvalidSeed {
                path: path.to_path_buf(),
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_initialised_with_ten_seeds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeds.txt");

        let seeds = load_seeds(&path).unwrap();
        assert_eq!(seeds, (0..10).collect::<Vec<_>>());
        assert!(path.exists());

        let again = load_seeds(&path).unwrap();
        assert_eq!(again, seeds);
    }

    #[test]
    fn blank_file_is_replaced_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeds.txt");
        fs::write(&path, "  \n\t\n").unwrap();

        let seeds = load_seeds(&path).unwrap();
        assert_eq!(seeds.len(), 10);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 10);
    }

    #[test]
    fn parsing_tolerates_mixed_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeds.txt");
        fs::write(&path, "7 3\n\n42\t11\n").unwrap();

        assert_eq!(load_seeds(&path).unwrap(), vec![7, 3, 42, 11]);
    }

    #[test]
    fn bad_token_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seeds.txt");
        fs::write(&path, "1\nseven\n").unwrap();

        match load_seeds(&path) {
            Err(HoldoutError::InvalidSeed { token, .. }) => assert_eq!(token, "seven"),
            other => panic!("expected InvalidSeed, got {other:?}"),
        }
    }
}
