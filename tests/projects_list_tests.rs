use predicates::prelude::*;
use test_env::TestEnv;

#[test]
fn test_projects_table() {
    let env = TestEnv::new();

    let output = env.cmd()
        .args(["projects"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("ID"), "Should have table header");
    assert!(stdout.contains("Progress"), "Should have progress column");
    assert!(stdout.contains("Project A"), "Should list Project A");
    assert!(stdout.contains("Project B"), "Should list Project B");
    assert!(stdout.contains("8/25"), "Should show step counts");
    assert!(stdout.contains("TOTAL"), "Should show total row");
    assert!(stdout.contains("16/50"), "Total row should sum steps");

    let a = stdout.find("Project A").unwrap();
    let b = stdout.find("Project B").unwrap();
    assert!(a < b, "Catalog order must be preserved");
}

#[test]
fn test_projects_filter_words_are_joined() {
    let env = TestEnv::new();

    env.cmd()
        .args(["projects", "PROJECT", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project A"))
        .stdout(predicate::str::contains("Project B").not());
}

#[test]
fn test_projects_no_match() {
    let env = TestEnv::new();

    env.cmd()
        .args(["projects", "zeta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects found."));
}

#[test]
fn test_projects_json() {
    let env = TestEnv::new();

    let output = env.cmd()
        .args(["projects", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["stages"], 5);
    assert_eq!(rows[0]["steps"], 25);
    assert_eq!(rows[0]["completed"], 8);
    assert_eq!(rows[1]["name"], "Project B");
}
