//! Integer parameter whose values are integer powers of a fixed base

use rand::{Rng, RngCore};

use crate::error::{Result, SpaceError};
use crate::space::value::ParameterValue;

use super::{
    check_finite_coordinate, check_log_domain, check_sample_count, log_base, numeric_value,
    to_i64, Parameter, ParameterKind,
};

/// Relative distance below which `base^x` is taken to be the nearest integer
const INTEGER_TOLERANCE: f64 = 1e-12;

/// Integer value searched in log scale with an integer exponent
///
/// With `base = 2`, `lb = 32`, `ub = 1024` the parameter takes one of
/// `{32, 64, 128, 256, 512, 1024}` and the optimization space is the exponent
/// range `[5, 10]`.
///
/// Raw bounds are snapped to the nearest exponent (ties to even), so `lb = 40`
/// under base 2 becomes exponent 5.
#[derive(Debug, Clone, PartialEq)]
pub struct IntExponentParameter {
    name: String,
    base: f64,
    int_base: i64,
    lower_bound: i64,
    upper_bound: i64,
}

impl IntExponentParameter {
    /// Create an exponent parameter from raw bounds and a base
    ///
    /// Fails with [`SpaceError::InvalidConfiguration`] when the logarithm is
    /// undefined (`base <= 0`, `base == 1`, non-positive bounds), when
    /// `base < 1`, when the rounded exponent range is empty, or when some
    /// `base^e` in the range is not a 64-bit integer. The last case covers
    /// negative exponents, fractional bases and overflow.
    pub fn new(name: &str, lb: f64, ub: f64, base: f64) -> Result<Self> {
        check_log_domain(name, lb, ub, base)?;
        if base < 1.0 {
            return Err(SpaceError::config(name, format!("base must exceed 1, got {base}")));
        }
        let lower = log_base(lb, base).round_ties_even();
        let upper = log_base(ub, base).round_ties_even();
        if lower > upper {
            return Err(SpaceError::config(
                name,
                format!("exponent range [{lower}, {upper}] is empty for lb={lb}, ub={ub}"),
            ));
        }
        let exponent =
            |v: f64| to_i64(name, v).map_err(|e| SpaceError::config(name, e.to_string()));
        let lower_bound = exponent(lower)?;
        let upper_bound = exponent(upper)?;
        let int_base = integer_base(name, base, lower_bound, upper_bound)?;

        let param = Self {
            name: name.to_string(),
            base,
            int_base,
            lower_bound,
            upper_bound,
        };
        let exact = |exponent: i64, raw: f64| param.power(exponent).is_ok_and(|p| p as f64 == raw);
        if !exact(lower_bound, lb) || !exact(upper_bound, ub) {
            tracing::debug!(
                parameter = name,
                lb,
                ub,
                base,
                lower_bound,
                upper_bound,
                "raw bounds snapped to nearest exponent"
            );
        }
        Ok(param)
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    /// Smallest exponent
    pub fn lower_bound(&self) -> i64 {
        self.lower_bound
    }

    /// Largest exponent
    pub fn upper_bound(&self) -> i64 {
        self.upper_bound
    }

    /// Draw `num` raw values `base^e`, `e` uniform in `[lower_bound, upper_bound]`
    pub fn sample_raw(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<i64>> {
        check_sample_count(&self.name, num)?;
        (0..num)
            .map(|_| self.power(rng.random_range(self.lower_bound..=self.upper_bound)))
            .collect()
    }

    /// `log(x) / log(base)`
    pub fn transform_raw(&self, x: f64) -> Result<f64> {
        if x.is_nan() || x <= 0.0 {
            return Err(SpaceError::InvalidValue(self.name.clone(), format!("{x} is not positive")));
        }
        Ok(log_base(x, self.base))
    }

    /// `base^x` truncated toward zero
    ///
    /// Integer exponents inside the range are computed exactly. Elsewhere a
    /// power within a relative `1e-12` of an integer is taken as that integer
    /// before truncating, so `inverse_transform_raw(transform_raw(n)) == n`
    /// for every integer `n` in range and not only for exact powers.
    pub fn inverse_transform_raw(&self, x: f64) -> Result<i64> {
        check_finite_coordinate(&self.name, x)?;
        if x.fract() == 0.0 && (self.lower_bound as f64..=self.upper_bound as f64).contains(&x) {
            return self.power(x as i64);
        }
        let raw = self.base.powf(x);
        let nearest = raw.round();
        if (raw - nearest).abs() <= nearest.abs() * INTEGER_TOLERANCE {
            return to_i64(&self.name, nearest);
        }
        to_i64(&self.name, raw.trunc())
    }

    /// Every raw value of the parameter, smallest exponent first
    pub fn values(&self) -> Result<Vec<i64>> {
        (self.lower_bound..=self.upper_bound).map(|e| self.power(e)).collect()
    }

    /// Exact `base^exponent` for exponents inside the range
    fn power(&self, exponent: i64) -> Result<i64> {
        u32::try_from(exponent)
            .ok()
            .and_then(|e| self.int_base.checked_pow(e))
            .ok_or_else(|| {
                SpaceError::InvalidValue(
                    self.name.clone(),
                    format!("{}^{exponent} is not a 64-bit integer", self.base),
                )
            })
    }
}

/// Integer form of `base`, checking that `base^e` is a 64-bit integer for
/// every `e` in `[lower, upper]`
///
/// A range holding only exponent 0 accepts any base, since every value is 1.
fn integer_base(name: &str, base: f64, lower: i64, upper: i64) -> Result<i64> {
    if lower < 0 {
        return Err(SpaceError::config(
            name,
            format!("exponent {lower} gives a non-integer value {}", base.powf(lower as f64)),
        ));
    }
    if upper == 0 {
        return Ok(1);
    }
    if base.fract() != 0.0 {
        return Err(SpaceError::config(
            name,
            format!("base {base} is not an integer, so {base}^{upper} is not an integer"),
        ));
    }
    let int_base = to_i64(name, base).map_err(|e| SpaceError::config(name, e.to_string()))?;
    u32::try_from(upper)
        .ok()
        .and_then(|e| int_base.checked_pow(e))
        .ok_or_else(|| {
            SpaceError::config(name, format!("{base}^{upper} does not fit in a 64-bit integer"))
        })?;
    Ok(int_base)
}

impl Parameter for IntExponentParameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ParameterKind {
        ParameterKind::IntExponent
    }

    fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<ParameterValue>> {
        Ok(self.sample_raw(num, rng)?.into_iter().map(ParameterValue::Int).collect())
    }

    fn transform(&self, value: &ParameterValue) -> Result<f64> {
        self.transform_raw(numeric_value(&self.name, value)?)
    }

    fn inverse_transform(&self, x: f64) -> Result<ParameterValue> {
        self.inverse_transform_raw(x).map(ParameterValue::Int)
    }

    fn contains(&self, value: &ParameterValue) -> bool {
        let ParameterValue::Int(v) = value else {
            return false;
        };
        let Ok(exponent) = self.transform_raw(*v as f64) else {
            return false;
        };
        let exponent = exponent.round() as i64;
        (self.lower_bound..=self.upper_bound).contains(&exponent)
            && self.power(exponent).is_ok_and(|p| p == *v)
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
        self.lower_bound as f64
    }

    fn opt_ub(&self) -> f64 {
        self.upper_bound as f64
    }
}
