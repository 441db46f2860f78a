// One-line catalog status for `projstat status`

use crate::cli::output::format_percent;
use crate::models::Catalog;
use crate::status::ProjectStatusModel;

/// Compute the status line, e.g. "2 projects, 16/50 steps complete (32.0%)"
pub fn compute_catalog_status(catalog: &Catalog) -> String {
    let summary = ProjectStatusModel::catalog_summary(catalog);
    let count = catalog.len();
    format!(
        "{} project{}, {}/{} steps complete ({})",
        count,
        if count == 1 { "" } else { "s" },
        summary.completed,
        summary.total,
        format_percent(summary.percent())
    )
}

/// JSON form of the status line
pub fn catalog_status_json(catalog: &Catalog) -> serde_json::Value {
    let summary = ProjectStatusModel::catalog_summary(catalog);
    serde_json::json!({
        "projects": catalog.len(),
        "completed": summary.completed,
        "total": summary.total,
        "progress": summary.percent(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sample_catalog;

    #[test]
    fn test_compute_catalog_status() {
        let catalog = sample_catalog();
        assert_eq!(compute_catalog_status(&catalog), "2 projects, 16/50 steps complete (32.0%)");
    }

    #[test]
    fn test_empty_catalog_status() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert_eq!(compute_catalog_status(&catalog), "0 projects, 0/0 steps complete (0.0%)");
        assert_eq!(catalog_status_json(&catalog)["progress"].as_f64(), Some(0.0));
    }
}
