use std::collections::HashSet;
use crate::error::CatalogError;
use crate::models::{Project, ProjectId};

/// Catalog model
///
/// The full ordered collection of projects shown by the dashboard.
/// Built once at startup (see `source::CatalogSource`) and read-only
/// afterwards.
///
/// # Invariants
///
/// - Project ids are positive and unique.
/// - Project, stage, and step names are non-empty.
/// - Project order, stage order, and step order are exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Validate and wrap a list of projects
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<ProjectId> = HashSet::new();

        for (i, project) in projects.iter().enumerate() {
            let path = format!("projects[{}]", i);
            if project.id <= 0 {
                return Err(CatalogError::InvalidId { path, id: project.id });
            }
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId { path, id: project.id });
            }
            require_name(&project.name, &path, "project name")?;

            for (j, stage) in project.stages.iter().enumerate() {
                let stage_path = format!("{}.stages[{}]", path, j);
                require_name(&stage.name, &stage_path, "stage name")?;

                for (k, step) in stage.steps.iter().enumerate() {
                    let step_path = format!("{}.steps[{}]", stage_path, k);
                    require_name(&step.name, &step_path, "step name")?;
                }
            }
        }

        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn first(&self) -> Option<&Project> {
        self.projects.first()
    }

    pub fn ids(&self) -> Vec<ProjectId> {
        self.projects.iter().map(|p| p.id).collect()
    }
}

fn require_name(name: &str, path: &str, field: &'static str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        Err(CatalogError::EmptyName {
            path: path.to_string(),
            field,
        })
    } else {
        Ok(())
    }
}
