use serde::{Deserialize, Serialize};

/// Project identifier (unique within a catalog, always positive)
pub type ProjectId = i64;

/// Step model
///
/// Leaf unit of work. Read-only once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub completed: bool,
}

impl Step {
    pub fn new(name: impl Into<String>, completed: bool) -> Self {
        Self {
            name: name.into(),
            completed,
        }
    }
}

/// Stage model
///
/// A named phase of a project. Step order is display order only;
/// steps do not depend on one another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Stage {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Number of completed steps
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }
}

/// Project model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub stages: Vec<Stage>,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>, stages: Vec<Stage>) -> Self {
        Self {
            id,
            name: name.into(),
            stages,
        }
    }
}
