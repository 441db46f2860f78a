// Error handling utilities for consistent error messages and exit codes

use std::process;
use crate::models::{Catalog, ProjectId};
use crate::utils::fuzzy;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, missing projects, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Validate that a project ID is valid (positive integer)
pub fn validate_project_id(id_str: &str) -> Result<ProjectId, String> {
    id_str.trim().parse::<ProjectId>()
        .map_err(|_| format!("Invalid project ID: '{}'. Project ID must be a number.", id_str))
        .and_then(|id| {
            if id > 0 {
                Ok(id)
            } else {
                Err(format!("Invalid project ID: {}. Project ID must be positive.", id))
            }
        })
}

/// List of `id (name)` pairs for error messages
fn known_projects(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "the catalog is empty".to_string();
    }
    let entries: Vec<String> = catalog
        .projects()
        .iter()
        .map(|p| format!("{} ({})", p.id, p.name))
        .collect();
    format!("known projects: {}", entries.join(", "))
}

/// Message for an id that is not in the catalog
pub fn project_not_found_message(catalog: &Catalog, id: ProjectId) -> String {
    format!("Project {} not found; {}", id, known_projects(catalog))
}

/// Message for an argument that is not a valid id, with name suggestions
pub fn invalid_project_id_message(catalog: &Catalog, arg: &str, reason: &str) -> String {
    let candidates = catalog.projects().iter().map(|p| (p, p.name.as_str()));
    let near = fuzzy::find_near_names(arg, candidates, 3);
    if near.is_empty() {
        return reason.to_string();
    }

    let suggestions: Vec<String> = near
        .iter()
        .map(|(p, _)| format!("{} ({})", p.id, p.name))
        .collect();
    format!("{} Did you mean: {}?", reason, suggestions.join(", "))
}
