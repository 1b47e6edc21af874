//! Continuous parameter searched on a log scale

use rand::{Rng, RngCore};

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{
    check_finite_coordinate, check_log_domain, check_sample_count, log_base, numeric_value,
    Parameter, ParameterKind,
};

/// Default log base for `pow` and `pow_int` parameters
pub const DEFAULT_POW_BASE: f64 = 10.0;

/// Continuous range `[lb, ub]` searched uniformly in `log_base` space
///
/// Typical use is a learning rate in `[1e-5, 1e-1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PowParameter {
    name: String,
    lb: f64,
    ub: f64,
    base: f64,
    opt_lb: f64,
    opt_ub: f64,
}

impl PowParameter {
    /// Create a log-scale parameter
    pub fn new(name: &str, lb: f64, ub: f64, base: f64) -> Result<Self> {
        check_log_domain(name, lb, ub, base)?;
        let opt_lb = log_base(lb, base);
        let opt_ub = log_base(ub, base);
        if opt_lb > opt_ub {
            return Err(SpaceError::config(
                name,
                format!("bounds [{lb}, {ub}] are decreasing under base {base}"),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            lb,
            ub,
            base,
            opt_lb,
            opt_ub,
        })
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

impl Parameter for PowParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::Pow
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        check_sample_count(&self.name, num)?;
        Ok((0..num)
            .map(|_| {
                let x = self.opt_lb + rng.random::<f64>() * (self.opt_ub - self.opt_lb);
                // clamp guards against powf overshooting the raw bounds by an ulp
                ParameterValue::Float(self.base.powf(x).clamp(self.lb, self.ub))
            })
            .collect())
    }

    fn transform(&self, value: &ParameterValue) -> Result<f64> {
        let x = numeric_value(&self.name, value)?;
        if x <= 0.0 {
            return Err(SpaceError::InvalidValue(self.name.clone(), format!("{x} is not positive")));
        }
        Ok(log_base(x, self.base))
    }

    fn inverse_transform(&self, x: f64) -> Result<ParameterValue> {
        check_finite_coordinate(&self.name, x)?;
        Ok(ParameterValue::Float(self.base.powf(x)))
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
        self.opt_lb
    }

    fn opt_ub(&self) -> f64 {
        self.opt_ub
    }
}
