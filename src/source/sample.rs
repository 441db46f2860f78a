// Built-in sample catalog

use crate::models::{Catalog, Project, Stage, Step};

/// Stage names shared by every sample project, in pipeline order
pub const PIPELINE_STAGES: [&str; 5] = [
    "Requirement Gathering",
    "Design",
    "Development",
    "Testing",
    "Deployment",
];

const STEP_NAMES: [[&str; 5]; 5] = [
    [
        "Identify Stakeholders",
        "Collect Requirements",
        "Analyze Requirements",
        "Create Requirement Document",
        "Review and Approve",
    ],
    [
        "Create System Design",
        "Design UI Mockups",
        "Database Design",
        "Review Design",
        "Approval",
    ],
    [
        "Set Up Development Environment",
        "Write Code",
        "Code Review",
        "Fix Bugs",
        "Integrate Modules",
    ],
    [
        "Unit Testing",
        "Integration Testing",
        "System Testing",
        "User Acceptance Testing",
        "Bug Fixes",
    ],
    [
        "Prepare Deployment Plan",
        "Set Up Server",
        "Deploy to Staging",
        "Smoke Testing",
        "Final Deployment",
    ],
];

/// Number of leading completed steps per stage
const PROJECT_A_DONE: [usize; 5] = [3, 1, 2, 2, 0];
const PROJECT_B_DONE: [usize; 5] = [4, 2, 1, 1, 0];

fn pipeline(done_per_stage: &[usize; 5]) -> Vec<Stage> {
    PIPELINE_STAGES
        .iter()
        .zip(STEP_NAMES.iter())
        .zip(done_per_stage.iter())
        .map(|((stage_name, step_names), &done)| {
            let steps = step_names
                .iter()
                .enumerate()
                .map(|(i, step_name)| Step::new(*step_name, i < done))
                .collect();
            Stage::new(*stage_name, steps)
        })
        .collect()
}

/// The two-project sample catalog shown when no catalog file is configured
pub fn sample_catalog() -> Catalog {
    let projects = vec![
        Project::new(1, "Project A", pipeline(&PROJECT_A_DONE)),
        Project::new(2, "Project B", pipeline(&PROJECT_B_DONE)),
    ];
    Catalog::new(projects).expect("sample catalog is valid")
}
