use crate::models::{Catalog, Project, ProjectId, Stage};
use crate::status::ProgressSummary;
use crate::utils::fuzzy::is_substring_match;

/// Project status model
///
/// Stateless, read-only views over a [`Catalog`]:
/// - Filtering projects by a case-insensitive name search
/// - Per-stage and per-project completion percentages
/// - Looking up a project by id
///
/// Nothing here mutates the catalog and nothing here can fail. A lookup
/// of an unknown id is reported as `None`; the caller decides whether to
/// keep its previous selection.
///
/// # Progress aggregation
///
/// Project progress is step-weighted: every step counts once, whatever
/// stage it belongs to. For a project with stages of different sizes this
/// differs from the mean of the stage percentages.
///
/// # Example
///
/// ```
/// use projstat::source::sample_catalog;
/// use projstat::status::ProjectStatusModel;
///
/// let catalog = sample_catalog();
/// let project = ProjectStatusModel::select_project(&catalog, 1).unwrap();
/// assert_eq!(ProjectStatusModel::stage_progress(&project.stages[0]), 60.0);
/// assert!(ProjectStatusModel::select_project(&catalog, 3).is_none());
/// ```
pub struct ProjectStatusModel;

impl ProjectStatusModel {
    /// Projects whose name contains `query` (case-insensitive), in catalog order
    ///
    /// An empty query returns every project.
    pub fn filter_projects<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Project> {
        let matches: Vec<&Project> = catalog
            .projects()
            .iter()
            .filter(|project| is_substring_match(&project.name, query))
            .collect();
        log::debug!("filter '{}' matched {} of {} projects", query, matches.len(), catalog.len());
        matches
    }

    /// Step counts for one stage
    pub fn stage_summary(stage: &Stage) -> ProgressSummary {
        ProgressSummary::new(stage.completed_count(), stage.steps.len())
    }

    /// Step counts across every stage of a project
    pub fn project_summary(project: &Project) -> ProgressSummary {
        project.stages.iter().map(Self::stage_summary).sum()
    }

    /// Step counts across the whole catalog
    pub fn catalog_summary(catalog: &Catalog) -> ProgressSummary {
        catalog.projects().iter().map(Self::project_summary).sum()
    }

    /// Percentage of completed steps in a stage (0.0 for an empty stage)
    pub fn stage_progress(stage: &Stage) -> f64 {
        Self::stage_summary(stage).percent()
    }

    /// Step-weighted percentage of completed steps in a project
    ///
    /// 0.0 when the project has no steps at all.
    pub fn project_progress(project: &Project) -> f64 {
        Self::project_summary(project).percent()
    }

    /// Look up a project by id
    pub fn select_project(catalog: &Catalog, id: ProjectId) -> Option<&Project> {
        let found = catalog.projects().iter().find(|project| project.id == id);
        if found.is_none() {
            log::debug!("project {} not found among {:?}", id, catalog.ids());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Step;
    use crate::source::sample_catalog;

    fn stage(name: &str, flags: &[bool]) -> Stage {
        let steps = flags
            .iter()
            .enumerate()
            .map(|(i, done)| Step::new(format!("{} {}", name, i + 1), *done))
            .collect();
        Stage::new(name, steps)
    }

    fn catalog_of(names: &[(ProjectId, &str)]) -> Catalog {
        Catalog::new(
            names
                .iter()
                .map(|(id, name)| Project::new(*id, *name, vec![stage("Design", &[true])]))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_stage_progress_empty_stage() {
        assert_eq!(ProjectStatusModel::stage_progress(&stage("Empty", &[])), 0.0);
    }

    #[test]
    fn test_stage_progress_full_only_when_all_completed() {
        assert_eq!(ProjectStatusModel::stage_progress(&stage("S", &[true, true, true])), 100.0);
        assert!(ProjectStatusModel::stage_progress(&stage("S", &[true, true, false])) < 100.0);
        assert_eq!(ProjectStatusModel::stage_progress(&stage("S", &[false])), 0.0);
    }

    #[test]
    fn test_stage_progress_not_rounded() {
        let progress = ProjectStatusModel::stage_progress(&stage("S", &[true, false, false]));
        assert!((progress - 33.333_333_333).abs() < 1e-6);
        assert_ne!(progress, 33.0);
    }

    #[test]
    fn test_project_progress_is_step_weighted() {
        // 1/1 and 1/4: step-weighted = 2/5 = 40%, mean of stages = 62.5%
        let project = Project::new(
            1,
            "Uneven",
            vec![stage("Small", &[true]), stage("Large", &[true, false, false, false])],
        );
        let progress = ProjectStatusModel::project_progress(&project);
        assert!((progress - 40.0).abs() < 1e-9);

        let stage_mean = project
            .stages
            .iter()
            .map(ProjectStatusModel::stage_progress)
            .sum::<f64>()
            / project.stages.len() as f64;
        assert!((stage_mean - 62.5).abs() < 1e-9);
    }

    #[test]
    fn test_project_progress_without_steps() {
        let no_stages = Project::new(1, "Nothing", vec![]);
        assert_eq!(ProjectStatusModel::project_progress(&no_stages), 0.0);

        let empty_stages = Project::new(2, "Hollow", vec![stage("A", &[]), stage("B", &[])]);
        assert_eq!(ProjectStatusModel::project_progress(&empty_stages), 0.0);
    }

    #[test]
    fn test_filter_empty_query_returns_catalog() {
        let catalog = catalog_of(&[(3, "Gamma"), (1, "Alpha"), (2, "Beta")]);
        let all = ProjectStatusModel::filter_projects(&catalog, "");
        let ids: Vec<ProjectId> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let catalog = sample_catalog();
        let matches = ProjectStatusModel::filter_projects(&catalog, "project a");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Project A");

        let matches = ProjectStatusModel::filter_projects(&catalog, "JECT");
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_filter_unmatched_is_empty() {
        let catalog = sample_catalog();
        assert!(ProjectStatusModel::filter_projects(&catalog, "zeta").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = catalog_of(&[(5, "web shop"), (2, "api"), (9, "Web admin")]);
        let ids: Vec<ProjectId> = ProjectStatusModel::filter_projects(&catalog, "web")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn test_select_project() {
        let catalog = sample_catalog();
        assert_eq!(ProjectStatusModel::select_project(&catalog, 2).unwrap().name, "Project B");
        assert!(ProjectStatusModel::select_project(&catalog, 3).is_none());
        assert!(ProjectStatusModel::select_project(&catalog, 0).is_none());
    }

    #[test]
    fn test_sample_project_a_requirement_gathering() {
        let catalog = sample_catalog();
        let project = ProjectStatusModel::select_project(&catalog, 1).unwrap();
        assert_eq!(project.stages[0].name, "Requirement Gathering");
        assert_eq!(ProjectStatusModel::stage_progress(&project.stages[0]), 60.0);
    }

    #[test]
    fn test_sample_project_b_progress() {
        let catalog = sample_catalog();
        let project = ProjectStatusModel::select_project(&catalog, 2).unwrap();
        assert_eq!(ProjectStatusModel::stage_progress(&project.stages[0]), 80.0);
        assert_eq!(project.stages[1].name, "Design");
        assert_eq!(ProjectStatusModel::stage_progress(&project.stages[1]), 40.0);

        let summary = ProjectStatusModel::project_summary(project);
        assert_eq!(summary, ProgressSummary::new(8, 25));
        assert_eq!(ProjectStatusModel::project_progress(project), 100.0 * 8.0 / 25.0);
    }

    #[test]
    fn test_catalog_summary() {
        let catalog = sample_catalog();
        let summary = ProjectStatusModel::catalog_summary(&catalog);
        assert_eq!(summary.total, 50);
        assert_eq!(summary.completed, 16);
    }
}
