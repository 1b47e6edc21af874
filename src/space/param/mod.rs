//! Parameter kinds and the capability interface they share
//!
//! Every parameter lives in two coordinate systems:
//!
//! - **raw space**: the values handed to the objective (batch sizes, learning
//!   rates, activation names)
//! - **optimization space**: the `f64` coordinates a surrogate model sees,
//!   bounded by [`Parameter::opt_lb`] and [`Parameter::opt_ub`]
//!
//! [`Parameter::transform`] maps raw to optimization space and
//! [`Parameter::inverse_transform`] maps back.

mod boolean;
mod categorical;
mod int_exponent;
mod integer;
mod numeric;
mod pow;
mod pow_int;
mod step_int;


pub use boolean::BoolParameter;
pub use categorical::CategoricalParameter;
pub use int_exponent::IntExponentParameter;
pub use integer::IntegerParameter;
pub use numeric::NumericParameter;
pub use pow::{PowParameter, DEFAULT_POW_BASE};
pub use pow_int::PowIntegerParameter;
pub use step_int::StepIntParameter;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SpaceError};

use super::value::ParameterValue;

/// Parameter kind tag, matching the `type` key of a parameter config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Num,
    Int,
    Pow,
    PowInt,
    IntExponent,
    Cat,
    Bool,
    StepInt,
}

impl ParameterKind {
    /// Config tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKind::Num => "num",
            ParameterKind::Int => "int",
            ParameterKind::Pow => "pow",
            ParameterKind::PowInt => "pow_int",
            ParameterKind::IntExponent => "int_exponent",
            ParameterKind::Cat => "cat",
            ParameterKind::Bool => "bool",
            ParameterKind::StepInt => "step_int",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single search dimension
///
/// Implementations are immutable after construction, so every method takes
/// `&self` and a parameter can be shared across threads freely. Randomness is
/// supplied by the caller.
pub trait Parameter: fmt::Debug + Send + Sync {
    /// Parameter name
    fn name(&self) -> &str;

    /// Parameter kind
    fn kind(&self) -> ParameterKind;

    /// Draw `num` raw-space values
    ///
    /// Fails with [`SpaceError::InvalidArgument`] when `num == 0`.
    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>>;

    /// Map a raw-space value to optimization space
    fn transform(&self, value: &ParameterValue) -> Result<f64>;

    /// Map an optimization-space coordinate back to raw space
    fn inverse_transform(&self, x: f64) -> Result<ParameterValue>;

    /// Whether `value` belongs to this parameter's raw domain
    fn contains(&self, value: &ParameterValue) -> bool;

    /// Ordered numeric dimension (as opposed to an enumeration)
    fn is_numeric(&self) -> bool;

    /// Raw values are discrete
    fn is_discrete(&self) -> bool;

    /// Optimization-space coordinates must be treated as discrete too
    fn is_discrete_after_transform(&self) -> bool;

    /// Lower bound in optimization space
    fn opt_lb(&self) -> f64;

    /// Upper bound in optimization space
    fn opt_ub(&self) -> f64;
}

pub(crate) fn check_sample_count(name: &str, num: usize) -> Result<()> {
    if num == 0 {
        return Err(SpaceError::InvalidArgument(format!(
            "sample count for '{name}' must be positive, got 0"
        )));
    }
    Ok(())
}

pub(crate) fn check_finite_coordinate(name: &str, x: f64) -> Result<()> {
    if !x.is_finite() {
        return Err(SpaceError::InvalidValue(
            name.to_string(),
            format!("optimization-space value {x} is not finite"),
        ));
    }
    Ok(())
}

pub(crate) fn numeric_value(name: &str, value: &ParameterValue) -> Result<f64> {
    value
        .as_float()
        .ok_or_else(|| SpaceError::InvalidValue(name.to_string(), format!("{value:?}")))
}

/// Validate a log base and raw bounds for the log-scale kinds
pub(crate) fn check_log_domain(name: &str, lb: f64, ub: f64, base: f64) -> Result<()> {
    if !base.is_finite() || base <= 0.0 {
        return Err(SpaceError::config(name, format!("base must be positive, got {base}")));
    }
    if base == 1.0 {
        return Err(SpaceError::config(name, "base must not be 1"));
    }
    if !lb.is_finite() || lb <= 0.0 {
        return Err(SpaceError::config(name, format!("lb must be positive, got {lb}")));
    }
    if !ub.is_finite() || ub <= 0.0 {
        return Err(SpaceError::config(name, format!("ub must be positive, got {ub}")));
    }
    Ok(())
}

/// `log(x) / log(base)`, exact for powers of two under base 2
pub(crate) fn log_base(x: f64, base: f64) -> f64 {
    x.log2() / base.log2()
}

/// Convert a raw `f64` to `i64`, rejecting values that do not fit
pub(crate) fn to_i64(name: &str, v: f64) -> Result<i64> {
    if !v.is_finite() || v < i64::MIN as f64 || v >= i64::MAX as f64 {
        return Err(SpaceError::InvalidValue(
            name.to_string(),
            format!("{v} does not fit in a 64-bit integer"),
        ));
    }
    Ok(v as i64)
}
