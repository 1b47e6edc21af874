//! Categorical parameter

use rand::{Rng, RngCore};
use std::collections::HashSet;

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{check_finite_coordinate, check_sample_count, Parameter, ParameterKind};

/// Unordered choice among named categories
///
/// Optimization space is the category index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalParameter {
    name: String,
    categories: Vec<String>,
}

impl CategoricalParameter {
    /// Create a categorical parameter, categories must be non-empty and distinct
    pub fn new(name: &str, categories: Vec<String>) -> Result<Self> {
        if categories.is_empty() {
            return Err(SpaceError::config(name, "categories cannot be empty"));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = categories.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(SpaceError::config(name, format!("duplicate category '{dup}'")));
        }
        Ok(Self {
            name: name.to_string(),
            categories,
        })
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Index of a category
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }
}

impl Parameter for CategoricalParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Cat
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        check_sample_count(&self.name, num)?;
        Ok((0..num)
            .map(|_| {
                let idx = rng.random_range(0..self.categories.len());
                ParameterValue::Categorical(self.categories[idx].clone())
            })
            .collect())
    }

    fn transform(&self, value: &ParameterValue) -> Result<f64> {
        value
            .as_str()
            .and_then(|s| self.index_of(s))
            .map(|idx| idx as f64)
            .ok_or_else(|| SpaceError::InvalidValue(self.name.clone(), format!("{value:?}")))
    }

    fn inverse_transform(&self, x: f64) -> Result<ParameterValue> {
        check_finite_coordinate(&self.name, x)?;
        let idx = x.round();
        if idx < 0.0 || idx >= self.categories.len() as f64 {
            return Err(SpaceError::InvalidValue(
                self.name.clone(),
                format!("category index {idx} out of range 0..{}", self.categories.len()),
            ));
        }
        Ok(ParameterValue::Categorical(self.categories[idx as usize].clone()))
    }

    fn contains(&self, value: &ParameterValue) -> bool {
        value.as_str().is_some_and(|s| self.index_of(s).is_some())
    }

    fn is_numeric(&self) -> bool {
        false
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn is_discrete_after_transform(&self) -> bool {
        true
    }

    fn opt_lb(&self) -> f64 {
        0.0
    }

    fn opt_ub(&self) -> f64 {
        (self.categories.len() - 1) as f64
    }
}
