// Core data models for projstat
// These structs represent the domain entities

pub mod project;
pub mod catalog;

pub use project::*;
pub use catalog::*;
