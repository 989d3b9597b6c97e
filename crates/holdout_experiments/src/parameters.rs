//! Hyperparameter grid for the solver constants.
//!
//! A [`ParameterSpace`] is an ordered list of named parameters, each with a
//! finite list of values. [`ParameterSpace::generate`] walks the Cartesian
//! product lazily: the first declared parameter varies slowest and the last
//! one fastest, so the enumeration order is fixed by the declaration order.

use std::collections::HashSet;

use holdout_core::{Configuration, HoldoutError, ParamValue, Result};
use serde::{Deserialize, Serialize};

#[path = "parameters/combinations.rs"]
mod combinations;

pub use combinations::Combinations;

/// One named parameter and the values to explore for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParameter {
    pub name: String,
    pub values: Vec<ParamValue>,
}

/// Defines the grid searched for every split.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSpace {
    parameters: Vec<GridParameter>,
}

impl ParameterSpace {
    /// Create an empty grid. Its product is the single empty configuration.
    pub fn grid() -> Self {
        Self::default()
    }

    /// Append a parameter; it varies faster than every parameter added before.
    pub fn parameter<V: Into<ParamValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.parameters.push(GridParameter {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn parameters(&self) -> &[GridParameter] {
        &self.parameters
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Number of configurations: the product of the domain sizes.
    pub fn len(&self) -> usize {
        self.parameters.iter().map(|p| p.values.len()).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily enumerate every configuration in grid order.
    pub fn generate(&self) -> Combinations<'_> {
        Combinations::new(&self.parameters)
    }

    /// Reject grids that cannot be bound to solver constants.
    pub fn validate(&self) -> Result<()> {
        if self.parameters.is_empty() {
            return Err(HoldoutError::Config(
                "the parameter grid has no parameters".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if parameter.name.trim().is_empty() {
                return Err(HoldoutError::Config(
                    "grid parameter names must not be empty".to_string(),
                ));
            }
            if !seen.insert(parameter.name.as_str()) {
                return Err(HoldoutError::Config(format!(
                    "grid parameter `{}` is declared twice",
                    parameter.name
                )));
            }
            if parameter.values.is_empty() {
                return Err(HoldoutError::Config(format!(
                    "grid parameter `{}` has no values",
                    parameter.name
                )));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ParameterSpace {
    type Item = Configuration;
    type IntoIter = Combinations<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.generate()
    }
}
