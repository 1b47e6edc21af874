//! Parameter configuration records and file loading
//!
//! A design space file is a YAML or JSON list of parameter records:
//!
//! ```yaml
//! - name: batch_size
//!   type: int_exponent
//!   lb: 32
//!   ub: 1024
//!   base: 2
//! - name: activation
//!   type: cat
//!   categories: [relu, gelu]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SpaceError};

use super::param::{
    BoolParameter, CategoricalParameter, IntExponentParameter, IntegerParameter, NumericParameter,
    Parameter, ParameterKind, PowIntegerParameter, PowParameter, StepIntParameter, DEFAULT_POW_BASE,
};
use super::value::Configuration;

fn default_pow_base() -> f64 {
    DEFAULT_POW_BASE
}

/// Kind-specific fields of a parameter record, selected by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterSpec {
    Num {
        lb: f64,
        ub: f64,
    },
    Int {
        lb: i64,
        ub: i64,
    },
    Pow {
        lb: f64,
        ub: f64,
        #[serde(default = "default_pow_base")]
        base: f64,
    },
    PowInt {
        lb: i64,
        ub: i64,
        #[serde(default = "default_pow_base")]
        base: f64,
    },
    IntExponent {
        lb: f64,
        ub: f64,
        base: f64,
    },
    Cat {
        categories: Vec<String>,
    },
    Bool,
    StepInt {
        lb: i64,
        ub: i64,
        step: i64,
    },
}

impl ParameterSpec {
    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterSpec::Num { .. } => ParameterKind::Num,
            ParameterSpec::Int { .. } => ParameterKind::Int,
            ParameterSpec::Pow { .. } => ParameterKind::Pow,
            ParameterSpec::PowInt { .. } => ParameterKind::PowInt,
            ParameterSpec::IntExponent { .. } => ParameterKind::IntExponent,
            ParameterSpec::Cat { .. } => ParameterKind::Cat,
            ParameterSpec::Bool => ParameterKind::Bool,
            ParameterSpec::StepInt { .. } => ParameterKind::StepInt,
        }
    }
}

/// One parameter record: a name plus kind-specific fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
    pub name: String,
    #[serde(flatten)]
    pub spec: ParameterSpec,
}

impl ParameterConfig {
    pub fn new(name: &str, spec: ParameterSpec) -> Self {
        Self {
            name: name.to_string(),
            spec,
        }
    }

    /// Construct and validate the parameter this record describes
    pub fn build(&self) -> Result<Box<dyn Parameter>> {
        let name = self.name.as_str();
        if name.trim().is_empty() {
            return Err(SpaceError::config(name, "parameter name cannot be empty"));
        }
        let param: Box<dyn Parameter> = match &self.spec {
            ParameterSpec::Num { lb, ub } => Box::new(NumericParameter::new(name, *lb, *ub)?),
            ParameterSpec::Int { lb, ub } => Box::new(IntegerParameter::new(name, *lb, *ub)?),
            ParameterSpec::Pow { lb, ub, base } => {
                Box::new(PowParameter::new(name, *lb, *ub, *base)?)
            }
            ParameterSpec::PowInt { lb, ub, base } => {
                Box::new(PowIntegerParameter::new(name, *lb, *ub, *base)?)
            }
            ParameterSpec::IntExponent { lb, ub, base } => {
                Box::new(IntExponentParameter::new(name, *lb, *ub, *base)?)
            }
            ParameterSpec::Cat { categories } => {
                Box::new(CategoricalParameter::new(name, categories.clone())?)
            }
            ParameterSpec::Bool => Box::new(BoolParameter::new(name)),
            ParameterSpec::StepInt { lb, ub, step } => {
                Box::new(StepIntParameter::new(name, *lb, *ub, *step)?)
            }
        };
        tracing::trace!(parameter = name, kind = %param.kind(), "built parameter");
        Ok(param)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| SpaceError::io(format!("Failed to read {}", path.display()), e))?;
    let parsed = if is_json(path) {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| SpaceError::ConfigParsing {
        path: path.to_path_buf(),
        message,
    })
}

/// Read parameter records from a YAML or JSON file (by extension)
pub fn load_parameter_configs<P: AsRef<Path>>(path: P) -> Result<Vec<ParameterConfig>> {
    let configs: Vec<ParameterConfig> = read_records(path.as_ref())?;
    tracing::debug!(
        path = %path.as_ref().display(),
        parameters = configs.len(),
        "loaded parameter configs"
    );
    Ok(configs)
}

/// Read a list of raw-space configurations from a YAML or JSON file
pub fn load_configurations<P: AsRef<Path>>(path: P) -> Result<Vec<Configuration>> {
    read_records(path.as_ref())
}
