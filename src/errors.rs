use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForgeError {
    #[error("Unknown assembler identifier `{0}`")]
    UnknownAssembler(String),

    #[error("No assembler selected")]
    NoAssemblerSelected,

    #[error("Assembler `{0}` is already registered")]
    DuplicateAssembler(String),

    #[error("Assembler unavailable: {0}")]
    AssemblerUnavailable(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read config file at {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },
}

impl ForgeError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn unknown<S: Into<String>>(id: S) -> Self {
        Self::UnknownAssembler(id.into())
    }
}
