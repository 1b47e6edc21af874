//! Continuous parameter on a linear scale

use rand::{Rng, RngCore};

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{check_finite_coordinate, check_sample_count, numeric_value, Parameter, ParameterKind};

/// Continuous range `[lb, ub]`, identity transform
#[derive(Debug, Clone, PartialEq)]
pub struct NumericParameter {
    name: String,
    lb: f64,
    ub: f64,
}

impl NumericParameter {
    /// Create a continuous parameter
    pub fn new(name: &str, lb: f64, ub: f64) -> Result<Self> {
        if !lb.is_finite() || !ub.is_finite() {
            return Err(SpaceError::config(
                name,
                format!("bounds must be finite, got [{lb}, {ub}]"),
            ));
        }
        if lb > ub {
            return Err(SpaceError::config(name, format!("lb {lb} exceeds ub {ub}")));
        }
        Ok(Self {
            name: name.to_string(),
            lb,
            ub,
        })
    }

    pub fn lb(&self) -> f64 {
        self.lb
    }

    pub fn ub(&self) -> f64 {
        self.ub
    }
}

impl Parameter for NumericParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Num
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        check_sample_count(&self.name, num)?;
        Ok((0..num)
            .map(|_| ParameterValue::Float(self.lb + rng.random::<f64>() * (self.ub - self.lb)))
            .collect())
    }

    fn transform(&self, value: &ParameterValue) -> Result<f64> {
        numeric_value(&self.name, value)
    }

    fn inverse_transform(&self, x: f64) -> Result<ParameterValue> {
        check_finite_coordinate(&self.name, x)?;
        Ok(ParameterValue::Float(x))
    }

    fn contains(&self, value: &ParameterValue) -> bool {
        value.as_float().is_some_and(|v| v >= self.lb && v <= self.ub)
    }

    fn is_numeric(&self) -> bool {
        true
    }

    fn is_discrete(&self) -> bool {
        false
    }

    fn is_discrete_after_transform(&self) -> bool {
        false
    }

    fn opt_lb(&self) -> f64 {
        self.lb
    }

    fn opt_ub(&self) -> f64 {
        self.ub
    }
}
