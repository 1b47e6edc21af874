//! Boolean parameter

use rand::{Rng, RngCore};

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{check_finite_coordinate, check_sample_count, Parameter, ParameterKind};

/// On/off switch, `false -> 0`, `true -> 1` in optimization space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolParameter {
    name: String,
}

impl BoolParameter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Parameter for BoolParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Bool
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        check_sample_count(&self.name, num)?;
        Ok((0..num).map(|_| ParameterValue::Bool(rng.random_bool(0.5))).collect())
    }

    fn transform(&self, value: &ParameterValue) -> Result<f64> {
        value
            .as_bool()
            .map(|b| if b { 1.0 } else { 0.0 })
            .ok_or_else(|| SpaceError::InvalidValue(self.name.clone(), format!("{value:?}")))
    }

    fn inverse_transform(&self, x: f64) -> Result<ParameterValue> {
        check_finite_coordinate(&self.name, x)?;
        Ok(ParameterValue::Bool(x > 0.5))
    }

    fn contains(&self, value: &ParameterValue) -> bool {
        value.as_bool().is_some()
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
        1.0
    }
}
