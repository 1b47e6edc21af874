//! Integer parameter searched on a continuous log scale

use rand::{Rng, RngCore};

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{
    check_finite_coordinate, check_log_domain, check_sample_count, log_base, numeric_value,
    to_i64, Parameter, ParameterKind,
};

/// Integer range `[lb, ub]` searched in `log_base` space
///
/// Unlike [`super::IntExponentParameter`] the exponent is continuous: any
/// integer in range can come out, and the optimization-space coordinate is
/// not discrete.
#[derive(Debug, Clone, PartialEq)]
pub struct PowIntegerParameter {
    name: String,
    lb: i64,
    ub: i64,
    base: f64,
    opt_lb: f64,
    opt_ub: f64,
}

impl PowIntegerParameter {
    /// Create a log-scale integer parameter
    pub fn new(name: &str, lb: i64, ub: i64, base: f64) -> Result<Self> {
        check_log_domain(name, lb as f64, ub as f64, base)?;
        let opt_lb = log_base(lb as f64, base);
        let opt_ub = log_base(ub as f64, base);
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

impl Parameter for PowIntegerParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::PowInt
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        check_sample_count(&self.name, num)?;
        (0..num)
            .map(|_| {
                let x = self.opt_lb + rng.random::<f64>() * (self.opt_ub - self.opt_lb);
                let raw = to_i64(&self.name, self.base.powf(x).round())?;
                Ok(ParameterValue::Int(raw.clamp(self.lb, self.ub)))
            })
            .collect()
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
        Ok(ParameterValue::Int(to_i64(&self.name, self.base.powf(x).round())?))
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
        false
    }

    fn opt_lb(&self) -> f64 {
        self.opt_lb
    }

    fn opt_ub(&self) -> f64 {
        self.opt_ub
    }
}
