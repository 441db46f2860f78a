use crate::models::{Catalog, Project, ProjectId};
use crate::status::ProjectStatusModel;

/// Dashboard selection state
///
/// Owned by the presentation layer and passed explicitly; the status
/// model never holds it. Tracks which project is displayed and the
/// current search text.
///
/// Transitions: `None -> first project` on [`Selection::initial`], then
/// `id -> id'` on each successful [`Selection::select`]. An unknown id
/// leaves the previous selection untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ProjectId>,
    search: String,
}

impl Selection {
    /// Select the first project of the catalog, if any
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            selected: catalog.first().map(|p| p.id),
            search: String::new(),
        }
    }

    pub fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Move the selection to `id`
    ///
    /// Returns the newly selected project, or `None` (selection unchanged)
    /// if no project has that id.
    pub fn select<'a>(&mut self, catalog: &'a Catalog, id: ProjectId) -> Option<&'a Project> {
        match ProjectStatusModel::select_project(catalog, id) {
            Some(project) => {
                self.selected = Some(project.id);
                Some(project)
            }
            None => {
                log::warn!(
                    "project {} not found; keeping selection {:?}",
                    id,
                    self.selected
                );
                None
            }
        }
    }

    /// The currently selected project
    ///
    /// Independent of the search text: a selected project stays displayed
    /// even when the filter hides its card.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        self.selected
            .and_then(|id| ProjectStatusModel::select_project(catalog, id))
    }

    /// Projects matching the current search text
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Project> {
        ProjectStatusModel::filter_projects(catalog, &self.search)
    }

    pub fn is_selected(&self, project: &Project) -> bool {
        self.selected == Some(project.id)
    }
}
