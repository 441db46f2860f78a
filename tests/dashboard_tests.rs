use predicates::prelude::*;
use test_env::TestEnv;

#[test]
fn test_no_args_shows_dashboard_for_first_project() {
    let env = TestEnv::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Software Project Status Dashboard"))
        .stdout(predicate::str::contains("* [1] Project A  Total Stages: 5"))
        .stdout(predicate::str::contains("  [2] Project B  Total Stages: 5"))
        .stdout(predicate::str::contains("=== Project A - Progress ==="))
        .stdout(predicate::str::contains("Requirement Gathering"))
        .stdout(predicate::str::contains("60.0% (3/5)"));
}

#[test]
fn test_dashboard_select_project() {
    let env = TestEnv::new();

    env.cmd()
        .args(["dashboard", "--project", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* [2] Project B"))
        .stdout(predicate::str::contains("=== Project B - Progress ==="))
        .stdout(predicate::str::contains("Project A - Progress").not());
}

#[test]
fn test_dashboard_unknown_project_keeps_default_selection() {
    let env = TestEnv::new();

    env.cmd()
        .args(["dashboard", "--project", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: project 3 not found; showing Project A"))
        .stdout(predicate::str::contains("=== Project A - Progress ==="));
}

#[test]
fn test_dashboard_search_is_case_insensitive() {
    let env = TestEnv::new();

    env.cmd()
        .args(["dashboard", "--search", "project b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: project b"))
        .stdout(predicate::str::contains("[2] Project B"))
        .stdout(predicate::str::contains("[1] Project A").not())
        // The selection is independent of the search
        .stdout(predicate::str::contains("=== Project A - Progress ==="));
}

#[test]
fn test_dashboard_search_without_matches() {
    let env = TestEnv::new();

    env.cmd()
        .args(["dashboard", "-s", "payroll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects match 'payroll'."));
}

#[test]
fn test_dashboard_steps_are_marked() {
    let env = TestEnv::new();

    env.cmd()
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  ✓ Identify Stakeholders"))
        .stdout(predicate::str::contains("  ✗ Final Deployment"));
}

#[test]
fn test_dashboard_json() {
    let env = TestEnv::new();

    let output = env.cmd()
        .args(["dashboard", "--project", "2", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["title"], "Software Project Status Dashboard");
    assert_eq!(json["selected"], 2);
    assert_eq!(json["projects"].as_array().unwrap().len(), 2);
    assert_eq!(json["detail"]["stages"][1]["name"], "Design");
    assert_eq!(json["detail"]["stages"][1]["progress"].as_f64(), Some(40.0));
    assert_eq!(json["detail"]["progress"].as_f64(), Some(32.0));
}

#[test]
fn test_color_policy() {
    let env = TestEnv::new();

    // Piped output is not a terminal, so auto means plain text
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());

    env.cmd()
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[32m  ✓ Identify Stakeholders\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[31m  ✗ Review and Approve\x1b[0m"));

    env.write_rc("color=always\n");
    env.cmd()
        .args(["dashboard", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_bar_width_from_config() {
    let env = TestEnv::new();
    env.write_rc("bar.width=10\n");

    env.cmd()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[██████░░░░] 60.0% (3/5)"));
}
