//! Typed design spaces for Bayesian optimization
//!
//! A [`DesignSpace`] is an ordered list of [`Parameter`]s, each mapping
//! between raw values and optimization-space coordinates.
//!
//! # Example
//!
//! ```
//! use espacio::space::DesignSpace;
//! use rand::SeedableRng;
//!
//! let space = DesignSpace::from_yaml_str(
//!     "- {name: batch_size, type: int_exponent, lb: 32, ub: 1024, base: 2}\n\
//!      - {name: activation, type: cat, categories: [relu, gelu]}",
//! )?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let configs = space.sample(4, &mut rng)?;
//! let batch = space.transform(&configs)?;
//! assert_eq!(batch.numeric.dim(), (4, 1));
//! assert_eq!(space.opt_ub()[0], 10.0);
//! # Ok::<(), espacio::SpaceError>(())
//! ```

mod config;
mod design;
mod param;
mod value;

pub use config::{load_configurations, load_parameter_configs, ParameterConfig, ParameterSpec};
pub use design::{DesignSpace, TransformedBatch};
pub use param::{
    BoolParameter, CategoricalParameter, IntExponentParameter, IntegerParameter, NumericParameter,
    Parameter, ParameterKind, PowIntegerParameter, PowParameter, StepIntParameter,
    DEFAULT_POW_BASE,
};
pub use value::{Configuration, ParameterValue};
