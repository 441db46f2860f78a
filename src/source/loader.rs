use serde::Deserialize;
use std::path::Path;
use crate::error::CatalogError;
use crate::models::{Catalog, Project, ProjectId, Stage, Step};

// Wire shape of a catalog file. Every field is optional here so that a
// missing one is reported with its location instead of a bare serde
// message; `Catalog::new` then checks ids and names.

#[derive(Debug, Deserialize)]
struct RawCatalog {
    projects: Option<Vec<RawProject>>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    id: Option<ProjectId>,
    name: Option<String>,
    stages: Option<Vec<RawStage>>,
}

#[derive(Debug, Deserialize)]
struct RawStage {
    name: Option<String>,
    steps: Option<Vec<RawStep>>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(alias = "name")]
    step_name: Option<String>,
    completed: Option<bool>,
}

fn required<T>(value: Option<T>, path: &str, field: &'static str) -> Result<T, CatalogError> {
    value.ok_or_else(|| CatalogError::MissingField {
        path: path.to_string(),
        field,
    })
}

impl RawStep {
    fn into_step(self, path: &str) -> Result<Step, CatalogError> {
        Ok(Step {
            name: required(self.step_name, path, "step_name")?,
            completed: required(self.completed, path, "completed")?,
        })
    }
}

impl RawStage {
    fn into_stage(self, path: &str) -> Result<Stage, CatalogError> {
        let name = required(self.name, path, "name")?;
        let steps = required(self.steps, path, "steps")?
            .into_iter()
            .enumerate()
            .map(|(k, raw)| raw.into_step(&format!("{}.steps[{}]", path, k)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Stage { name, steps })
    }
}

impl RawProject {
    fn into_project(self, path: &str) -> Result<Project, CatalogError> {
        let id = required(self.id, path, "id")?;
        let name = required(self.name, path, "name")?;
        let stages = required(self.stages, path, "stages")?
            .into_iter()
            .enumerate()
            .map(|(j, raw)| raw.into_stage(&format!("{}.stages[{}]", path, j)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Project { id, name, stages })
    }
}

/// Parse and validate a JSON catalog document
///
/// Expected shape: `{"projects": [{"id", "name", "stages": [{"name",
/// "steps": [{"step_name", "completed"}]}]}]}`. `name` is accepted in
/// place of `step_name`.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    let projects = required(raw.projects, "catalog", "projects")?
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_project(&format!("projects[{}]", i)))
        .collect::<Result<Vec<_>, _>>()?;
    let catalog = Catalog::new(projects)?;
    log::debug!("parsed catalog with {} projects", catalog.len());
    Ok(catalog)
}

/// Read and validate a JSON catalog file
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&contents)
}
