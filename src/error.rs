//! Design space error types
//!
//! Every variant carries enough context to point at the offending parameter
//! or file without consulting the source.

use std::path::PathBuf;
use thiserror::Error;

/// Design space errors
#[derive(Debug, Error)]
pub enum SpaceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration for parameter '{name}': {message}")]
    InvalidConfiguration { name: String, message: String },

    #[error("Parameter not found: {0}")]
    ParameterNotFound(String),

    #[error("Duplicate parameter: {0}\n  → Parameter names must be unique within a design space")]
    DuplicateParameter(String),

    #[error("Invalid parameter value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Empty design space")]
    EmptySpace,

    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML/JSON syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl SpaceError {
    /// Invalid configuration for a named parameter
    pub fn config(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            name: name.into(),
            message: message.into(),
        }
    }

    /// IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Stable error code for structured output
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "E001",
            Self::InvalidConfiguration { .. } => "E002",
            Self::ParameterNotFound(_) => "E003",
            Self::DuplicateParameter(_) => "E004",
            Self::InvalidValue(..) => "E005",
            Self::EmptySpace => "E006",
            Self::ShapeMismatch { .. } => "E007",
            Self::ConfigParsing { .. } => "E010",
            Self::Io { .. } => "E050",
        }
    }
}

/// Result type for design space operations
pub type Result<T> = std::result::Result<T, SpaceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_space_error_display() {
        let err = SpaceError::InvalidArgument("num must be positive".to_string());
        assert!(format!("{err}").contains("Invalid argument"));

        let err = SpaceError::config("batch_size", "base must not be 1");
        let msg = format!("{err}");
        assert!(msg.contains("batch_size"));
        assert!(msg.contains("base must not be 1"));

        let err = SpaceError::ParameterNotFound("lr".to_string());
        assert!(format!("{err}").contains("Parameter not found"));
        assert!(format!("{err}").contains("lr"));

        let err = SpaceError::InvalidValue("lr".to_string(), "-1".to_string());
        assert!(format!("{err}").contains("Invalid parameter value"));

        let err = SpaceError::EmptySpace;
        assert!(format!("{err}").contains("Empty design space"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = SpaceError::ShapeMismatch {
            expected: (4, 2),
            actual: (4, 3),
        };
        let msg = err.to_string();
        assert!(msg.contains("(4, 2)"));
        assert!(msg.contains("(4, 3)"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SpaceError::io("reading space.yaml", source);
        assert!(err.to_string().contains("reading space.yaml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_codes_are_unique() {
        let errors = vec![
            SpaceError::InvalidArgument(String::new()),
            SpaceError::config("", ""),
            SpaceError::ParameterNotFound(String::new()),
            SpaceError::DuplicateParameter(String::new()),
            SpaceError::InvalidValue(String::new(), String::new()),
            SpaceError::EmptySpace,
            SpaceError::ShapeMismatch {
                expected: (0, 0),
                actual: (0, 0),
            },
            SpaceError::ConfigParsing {
                path: PathBuf::new(),
                message: String::new(),
            },
            SpaceError::io("", std::io::Error::other("x")),
        ];
        let codes: HashSet<_> = errors.iter().map(SpaceError::code).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
