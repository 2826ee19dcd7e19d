//! Specs for `perfbench compute`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

fn result_schema() -> serde_json::Value {
    let path = repo_root().join("docs/specs/result.schema.json");
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// > Compute writes performance_result.json with all four fields
#[test]
fn compute_writes_result_record() {
    let project = Project::instant();

    project
        .cmd()
        .args(["compute", "--no-git"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("Computing performance metrics...\n"))
        .stdout(predicates::str::contains(
            "Performance metrics saved to performance_result.json\n",
        ))
        .stdout(predicates::str::contains("Performance value: 3.0000\n"));

    let record = project.json("performance_result.json");
    assert_eq!(record["performance"].as_f64(), Some(3.0));
    assert_eq!(record["status"], "completed");
    assert!(record["timestamp"].as_f64().unwrap() > 0.0);
    assert!(record["git_hash"].is_null());
}

/// > Output conforms to docs/specs/result.schema.json
#[test]
fn compute_output_matches_schema() {
    let project = Project::instant();
    project.cmd().args(["compute", "--no-git"]).assert().success();

    let validator = jsonschema::validator_for(&result_schema()).unwrap();
    let record = project.json("performance_result.json");
    assert!(validator.is_valid(&record), "record does not match schema: {record}");
}

/// > git_hash is the HEAD commit when run inside a repository
#[test]
fn compute_records_git_hash_in_repository() {
    let project = Project::instant();
    project.file("README.md", "# bench\n");
    git_init(&project);
    git_initial_commit(&project);

    project
        .cmd()
        .arg("compute")
        .assert()
        .success()
        .stdout(predicates::str::contains(format!("Git hash: {}\n", git_head(&project))));

    let record = project.json("performance_result.json");
    assert_eq!(record["git_hash"].as_str(), Some(git_head(&project).as_str()));
}

/// > git_hash is null when the lookup fails
#[test]
fn compute_null_hash_in_repository_without_commits() {
    let project = Project::instant();
    git_init(&project);

    project
        .cmd()
        .arg("compute")
        .assert()
        .success()
        .stdout(predicates::str::contains("Git hash").not());

    assert!(project.json("performance_result.json")["git_hash"].is_null());
}

/// > --no-git skips the lookup even inside a repository
#[test]
fn compute_no_git_flag_skips_lookup() {
    let project = Project::instant();
    project.file("README.md", "# bench\n");
    git_init(&project);
    git_initial_commit(&project);

    project.cmd().args(["compute", "--no-git"]).assert().success();
    assert!(project.json("performance_result.json")["git_hash"].is_null());
}

/// > Compute overwrites an existing result file
#[test]
fn compute_overwrites_existing_record() {
    let project = Project::instant();
    project.file("performance_result.json", "{\"performance\": 42}");

    project.cmd().args(["compute", "--no-git"]).assert().success();
    assert_eq!(project.json("performance_result.json")["performance"].as_f64(), Some(3.0));
}

/// > --delay-secs and --output override the defaults
#[test]
fn compute_flag_overrides() {
    let project = Project::empty();

    project
        .cmd()
        .args(["compute", "--no-git", "--delay-secs", "0", "--output", "out/run.json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Performance metrics saved to out/run.json\n"));

    assert_eq!(project.json("out/run.json")["status"], "completed");
}

/// > config can change the reported score
#[test]
fn compute_reads_config_score() {
    let project = Project::empty();
    project.config("[compute]\ndelay_secs = 0\nperformance = 12.5\ngit = false\n");

    project
        .cmd()
        .arg("compute")
        .assert()
        .success()
        .stdout(predicates::str::contains("Performance value: 12.5000\n"));
}

/// > an invalid config is an internal error
#[test]
fn compute_invalid_config_fails() {
    let project = Project::empty();
    project.config("[compute]\ndelay = 0\n");

    project
        .cmd()
        .arg("compute")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("perfbench: failed to parse config"));

    assert!(!project.path().join("performance_result.json").exists());
}

/// > compute output feeds evaluate
#[test]
fn computed_record_evaluates_against_itself() {
    let project = Project::instant();
    project.cmd().args(["compute", "--no-git"]).assert().success();

    project
        .cmd()
        .args(["evaluate", "performance_result.json", "performance_result.json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Percent change:         +0.00%"));
}
