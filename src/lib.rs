//! projstat - project status dashboard
//!
//! This library provides the core functionality for projstat, including:
//! - Data models for projects, stages, steps, and the catalog
//! - The progress aggregation and selection model
//! - Catalog sources (built-in sample, validated JSON files) and rc config
//! - CLI command parsing and terminal rendering
//!
//! # Example
//!
//! ```
//! use projstat::source::sample_catalog;
//! use projstat::status::{ProjectStatusModel, Selection};
//!
//! let catalog = sample_catalog();
//! let mut selection = Selection::initial(&catalog);
//! selection.set_search("project b");
//!
//! let visible = selection.visible(&catalog);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(ProjectStatusModel::project_progress(visible[0]), 32.0);
//! ```

pub mod error;
pub mod models;
pub mod source;
pub mod status;
pub mod cli;
pub mod utils;
