//! Integer parameter restricted to a fixed stride

use rand::{Rng, RngCore};

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{check_finite_coordinate, check_sample_count, to_i64, Parameter, ParameterKind};

/// Integers `lb, lb + step, lb + 2*step, ...` not exceeding `ub`
///
/// Optimization space counts steps from `lb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIntParameter {
    name: String,
    lb: i64,
    ub: i64,
    step: i64,
    num_step: i64,
}

impl StepIntParameter {
    /// Create a strided integer parameter
    pub fn new(name: &str, lb: i64, ub: i64, step: i64) -> Result<Self> {
        if step <= 0 {
            return Err(SpaceError::config(name, format!("step must be positive, got {step}")));
        }
        if lb > ub {
            return Err(SpaceError::config(name, format!("lb {lb} exceeds ub {ub}")));
        }
        let span = ub.checked_sub(lb).ok_or_else(|| {
            SpaceError::config(name, format!("range [{lb}, {ub}] overflows a 64-bit integer"))
        })?;
        let num_step = span / step;
        Ok(Self {
            name: name.to_string(),
            lb,
            ub,
            step,
            num_step,
        })
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of strides above `lb`
    pub fn num_step(&self) -> i64 {
        self.num_step
    }
}

impl Parameter for StepIntParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::StepInt
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        check_sample_count(&self.name, num)?;
        Ok((0..num)
            .map(|_| ParameterValue::Int(self.lb + rng.random_range(0..=self.num_step) * self.step))
            .collect())
    }

    fn transform(&self, value: &ParameterValue) -> Result<f64> {
        value
            .as_int()
            .and_then(|v| v.checked_sub(self.lb))
            .map(|offset| offset as f64 / self.step as f64)
            .ok_or_else(|| SpaceError::InvalidValue(self.name.clone(), format!("{value:?}")))
    }

    fn inverse_transform(&self, x: f64) -> Result<ParameterValue> {
        check_finite_coordinate(&self.name, x)?;
        let steps = to_i64(&self.name, x.round())?;
        steps
            .checked_mul(self.step)
            .and_then(|offset| offset.checked_add(self.lb))
            .map(ParameterValue::Int)
            .ok_or_else(|| {
                SpaceError::InvalidValue(self.name.clone(), format!("{steps} steps overflow"))
            })
    }

    fn contains(&self, value: &ParameterValue) -> bool {
        matches!(value, ParameterValue::Int(v)
            if *v >= self.lb && *v <= self.ub && (*v - self.lb) % self.step == 0)
    }

    fn is_numeric(&self) -> bool {
        true
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
        self.num_step as f64
    }
}
