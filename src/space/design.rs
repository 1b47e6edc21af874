//! Design space: an ordered set of named parameters

use ndarray::{Array1, Array2, ArrayView1};
use rand::RngCore;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, SpaceError};

use super::config::{load_parameter_configs, ParameterConfig};
use super::param::{check_sample_count, Parameter};
use super::value::{Configuration, ParameterValue};

/// Batch of configurations in optimization space
///
/// Rows are configurations. `numeric` columns follow
/// [`DesignSpace::numeric_names`], `enumerated` columns follow
/// [`DesignSpace::enum_names`] and hold category indices.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedBatch {
    pub numeric: Array2<f64>,
    pub enumerated: Array2<i64>,
}

impl TransformedBatch {
    /// Number of configurations in the batch
    pub fn len(&self) -> usize {
        self.numeric.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Single optimization-space row: numeric columns then enum columns
    pub fn row(&self, idx: usize) -> Vec<f64> {
        self.numeric
            .row(idx)
            .iter()
            .copied()
            .chain(self.enumerated.row(idx).iter().map(|&v| v as f64))
            .collect()
    }
}

/// Ordered collection of parameters consumed by an optimizer
///
/// Numeric parameters form the continuous block of the optimization space,
/// categorical and boolean parameters form the enumerated block.
#[derive(Debug, Default)]
pub struct DesignSpace {
    params: Vec<Box<dyn Parameter>>,
    index: HashMap<String, usize>,
}

impl DesignSpace {
    /// Create an empty design space
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a space from parameter records, keeping their order
    pub fn parse(configs: &[ParameterConfig]) -> Result<Self> {
        let mut space = Self::new();
        for config in configs {
            space.add(config.build()?)?;
        }
        tracing::debug!(
            parameters = space.len(),
            numeric = space.numeric_names().len(),
            enumerated = space.enum_names().len(),
            "parsed design space"
        );
        Ok(space)
    }

    /// Parse a YAML list of parameter records
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let configs: Vec<ParameterConfig> = serde_yaml::from_str(yaml).map_err(|e| {
            SpaceError::ConfigParsing {
                path: "<yaml>".into(),
                message: e.to_string(),
            }
        })?;
        Self::parse(&configs)
    }

    /// Parse a JSON list of parameter records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let configs: Vec<ParameterConfig> = serde_json::from_str(json).map_err(|e| {
            SpaceError::ConfigParsing {
                path: "<json>".into(),
                message: e.to_string(),
            }
        })?;
        Self::parse(&configs)
    }

    /// Load a space from a YAML or JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&load_parameter_configs(path)?)
    }

    /// Append a parameter; names must be unique
    pub fn add(&mut self, param: Box<dyn Parameter>) -> Result<()> {
        let name = param.name().to_string();
        if self.index.contains_key(&name) {
            return Err(SpaceError::DuplicateParameter(name));
        }
        self.index.insert(name, self.params.len());
        self.params.push(param);
        Ok(())
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Option<&dyn Parameter> {
        self.index.get(name).map(|&idx| self.params[idx].as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterate over parameters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Parameter> {
        self.params.iter().map(|p| p.as_ref())
    }

    /// All parameter names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|p| p.name()).collect()
    }

    /// Names of the numeric block
    pub fn numeric_names(&self) -> Vec<&str> {
        self.numeric().map(|p| p.name()).collect()
    }

    /// Names of the enumerated block
    pub fn enum_names(&self) -> Vec<&str> {
        self.enumerated().map(|p| p.name()).collect()
    }

    fn numeric(&self) -> impl Iterator<Item = &dyn Parameter> {
        self.iter().filter(|p| p.is_numeric())
    }

    fn enumerated(&self) -> impl Iterator<Item = &dyn Parameter> {
        self.iter().filter(|p| !p.is_numeric())
    }

    /// Draw `num` random configurations
    pub fn sample(&self, num: usize, rng: &mut dyn RngCore) -> Result<Vec<Configuration>> {
        if self.is_empty() {
            return Err(SpaceError::EmptySpace);
        }
        check_sample_count("design space", num)?;

        let mut configs = vec![Configuration::new(); num];
        for param in self.iter() {
            for (config, value) in configs.iter_mut().zip(param.sample(num, rng)?) {
                config.insert(param.name().to_string(), value);
            }
        }
        Ok(configs)
    }

    /// Check that every parameter is present with a value inside its domain
    pub fn validate(&self, config: &Configuration) -> Result<()> {
        for param in self.iter() {
            match config.get(param.name()) {
                Some(value) if param.contains(value) => {}
                Some(value) => {
                    return Err(SpaceError::InvalidValue(
                        param.name().to_string(),
                        format!("{value:?}"),
                    ))
                }
                None => return Err(SpaceError::ParameterNotFound(param.name().to_string())),
            }
        }
        Ok(())
    }

    /// Map raw configurations into optimization space
    pub fn transform(&self, configs: &[Configuration]) -> Result<TransformedBatch> {
        let numeric: Vec<&dyn Parameter> = self.numeric().collect();
        let enumerated: Vec<&dyn Parameter> = self.enumerated().collect();

        let mut xc = Array2::<f64>::zeros((configs.len(), numeric.len()));
        let mut xe = Array2::<i64>::zeros((configs.len(), enumerated.len()));
        for (row, config) in configs.iter().enumerate() {
            for (col, param) in numeric.iter().enumerate() {
                xc[[row, col]] = param.transform(lookup(config, param.name())?)?;
            }
            for (col, param) in enumerated.iter().enumerate() {
                xe[[row, col]] = param.transform(lookup(config, param.name())?)?.round() as i64;
            }
        }
        Ok(TransformedBatch {
            numeric: xc,
            enumerated: xe,
        })
    }

    /// Map optimization-space rows back to raw configurations
    ///
    /// `numeric` must have one column per numeric parameter and `enumerated`
    /// one column per enumerated parameter, with the same number of rows.
    pub fn inverse_transform(
        &self,
        numeric: &Array2<f64>,
        enumerated: &Array2<i64>,
    ) -> Result<Vec<Configuration>> {
        let numeric_params: Vec<&dyn Parameter> = self.numeric().collect();
        let enum_params: Vec<&dyn Parameter> = self.enumerated().collect();
        let rows = numeric.nrows().max(enumerated.nrows());

        check_shape(numeric.dim(), (rows, numeric_params.len()))?;
        check_shape(enumerated.dim(), (rows, enum_params.len()))?;

        (0..rows)
            .map(|row| {
                let mut config = Configuration::new();
                insert_row(&mut config, &numeric_params, numeric.row(row))?;
                let indices = enumerated.row(row).mapv(|v| v as f64);
                insert_row(&mut config, &enum_params, indices.view())?;
                Ok(config)
            })
            .collect()
    }

    /// Optimization-space lower bounds: numeric block then enumerated block
    pub fn opt_lb(&self) -> Array1<f64> {
        self.numeric().chain(self.enumerated()).map(|p| p.opt_lb()).collect()
    }

    /// Optimization-space upper bounds: numeric block then enumerated block
    pub fn opt_ub(&self) -> Array1<f64> {
        self.numeric().chain(self.enumerated()).map(|p| p.opt_ub()).collect()
    }
}

fn lookup<'a>(config: &'a Configuration, name: &str) -> Result<&'a ParameterValue> {
    config.get(name).ok_or_else(|| SpaceError::ParameterNotFound(name.to_string()))
}

fn check_shape(actual: (usize, usize), expected: (usize, usize)) -> Result<()> {
    if actual != expected {
        return Err(SpaceError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

fn insert_row(
    config: &mut Configuration,
    params: &[&dyn Parameter],
    row: ArrayView1<f64>,
) -> Result<()> {
    for (param, &x) in params.iter().zip(row.iter()) {
        config.insert(param.name().to_string(), param.inverse_transform(x)?);
    }
    Ok(())
}
