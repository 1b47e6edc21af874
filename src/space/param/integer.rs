//! Integer parameter on a linear scale

use rand::{Rng, RngCore};

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{check_finite_coordinate, check_sample_count, to_i64, Parameter, ParameterKind};

/// Integer range `[lb, ub]`, rounded on the way back from optimization space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerParameter {
    name: String,
    lb: i64,
    ub: i64,
}

impl IntegerParameter {
    /// Create an integer parameter
    pub fn new(name: &str, lb: i64, ub: i64) -> Result<Self> {
        if lb > ub {
            return Err(SpaceError::config(name, format!("lb {lb} exceeds ub {ub}")));
        }
        Ok(Self {
            name: name.to_string(),
            lb,
            ub,
        })
    }

    pub fn lb(&self) -> i64 {
        self.lb
    }

    pub fn ub(&self) -> i64 {
        self.ub
    }
}

impl Parameter for IntegerParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Int
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        check_sample_count(&self.name, num)?;
        Ok((0..num).map(|_| ParameterValue::Int(rng.random_range(self.lb..=self.ub))).collect())
    }

    fn transform(&self, value: &ParameterValue) -> Result<f64> {
        value
            .as_int()
            .map(|v| v as f64)
            .ok_or_else(|| SpaceError::InvalidValue(self.name.clone(), format!("{value:?}")))
    }

    fn inverse_transform(&self, x: f64) -> Result<ParameterValue> {
        check_finite_coordinate(&self.name, x)?;
        Ok(ParameterValue::Int(to_i64(&self.name, x.round())?))
    }

    fn contains(&self, value: &ParameterValue) -> bool {
        matches!(value, ParameterValue::Int(v) if *v >= self.lb && *v <= self.ub)
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
        self.lb as f64
    }

    fn opt_ub(&self) -> f64 {
        self.ub as f64
    }
}
