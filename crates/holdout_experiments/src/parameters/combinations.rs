use holdout_core::Configuration;

use super::GridParameter;

/// Lazy Cartesian product over the grid, driven by an odometer of value
/// indices. The last parameter's index turns over first.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    parameters: &'a [GridParameter],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a> Combinations<'a> {
    pub(super) fn new(parameters: &'a [GridParameter]) -> Self {
        Self {
            parameters,
            indices: vec![0; parameters.len()],
            exhausted: parameters.iter().any(|p| p.values.is_empty()),
        }
    }

    fn current(&self) -> Configuration {
        let mut configuration = Configuration::new();
        for (parameter, &idx) in self.parameters.iter().zip(&self.indices) {
            configuration.push(parameter.name.clone(), parameter.values[idx].clone());
        }
        configuration
    }

    fn advance(&mut self) {
        for (slot, parameter) in self.indices.iter_mut().zip(self.parameters).rev() {
            *slot += 1;
            if *slot < parameter.values.len() {
                return;
            }
            *slot = 0;
        }
        self.exhausted = true;
    }

    fn remaining(&self) -> usize {
        if self.exhausted {
            return 0;
        }
        // Mixed-radix position of the odometer within the full product.
        let total: usize = self.parameters.iter().map(|p| p.values.len()).product();
        let consumed = self
            .indices
            .iter()
            .zip(self.parameters)
            .fold(0, |acc, (&idx, parameter)| acc * parameter.values.len() + idx);
        total - consumed
    }
}

impl Iterator for Combinations<'_> {
    type Item = Configuration;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let configuration = self.current();
        self.advance();
        Some(configuration)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}
