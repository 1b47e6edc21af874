//! Espacio: typed hyperparameter design spaces
//!
//! Search dimensions for Bayesian optimization with their sampling and
//! raw/optimization-space transform rules, plus a [`space::DesignSpace`]
//! container that batches them for a surrogate model.

pub mod cli;
pub mod error;
pub mod space;

pub use error::{Result, SpaceError};
pub use space::{
    Configuration, DesignSpace, IntExponentParameter, Parameter, ParameterConfig, ParameterKind,
    ParameterValue, TransformedBatch,
};
