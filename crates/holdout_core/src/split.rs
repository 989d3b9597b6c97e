use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::{ensure_parent_dir, HoldoutError, Result};
use crate::rows::RowId;

/// A seeded 50/50 partition of the row universe.
///
/// `train` holds the first `floor(N/2)` rows of the shuffled universe and
/// `test` the rest, both in shuffled order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    pub seed: u64,
    pub train: Vec<RowId>,
    pub test: Vec<RowId>,
}

impl Split {
    /// Shuffle a copy of `rows` with a generator seeded by `seed` and cut it
    /// at the midpoint. The same inputs always give the same split.
    pub fn generate(rows: &[RowId], seed: u64) -> Self {
        let mut train = rows.to_vec();
        let mut rng = StdRng::seed_from_u64(seed);
        train.shuffle(&mut rng);
        let test = train.split_off(train.len() / 2);
        Self { seed, train, test }
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }

    /// Render the split as solver facts, train rows first.
    pub fn to_facts(&self) -> String {
        let mut out = String::with_capacity(self.len() * 20);
        for row in &self.train {
            out.push_str(&format!("train_given({row}).\n"));
        }
        for row in &self.test {
            out.push_str(&format!("test_given({row}).\n"));
        }
        out
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        fs::write(path, self.to_facts()).map_err(|source| HoldoutError::io(path, source))
    }
}
