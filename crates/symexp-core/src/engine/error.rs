use thiserror::Error;

use super::config::ConfigError;
use crate::core::spacegroup::symops::SpacegroupError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SymmetryError {
    #[error("Space group resolution failed: {source}")]
    Spacegroup {
        #[from]
        source: SpacegroupError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Structure carries no assembly information")]
    AssemblyInfoMissing,

    #[error("Assembly '{name}' not found")]
    AssemblyNotFound { name: String },

    #[error("Generator refers to operator {index}, but only {count} are declared")]
    OperatorNotFound { index: usize, count: usize },

    #[error("Cancelled before phase '{phase}'")]
    Cancelled { phase: &'static str },
}
