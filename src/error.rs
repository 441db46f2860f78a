//! Error types for catalog loading and configuration
//!
//! The status model itself never fails; these cover the boundary where
//! data enters the process (rc file, catalog file).

use std::path::PathBuf;
use crate::models::ProjectId;

/// Catalog loading/validation error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog is not valid JSON or has the wrong shape
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Required field is absent
    #[error("{path}: missing required field '{field}'")]
    MissingField { path: String, field: &'static str },

    /// Name is empty or whitespace
    #[error("{path}: {field} cannot be empty")]
    EmptyName { path: String, field: &'static str },

    /// Project id is zero or negative
    #[error("{path}: project id must be positive, got {id}")]
    InvalidId { path: String, id: ProjectId },

    /// Two projects share an id
    #[error("{path}: duplicate project id {id}")]
    DuplicateId { path: String, id: ProjectId },
}

/// rc file error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: invalid value '{value}' for {key} ({expected})")]
    InvalidValue {
        path: PathBuf,
        line: usize,
        key: String,
        value: String,
        expected: &'static str,
    },
}
