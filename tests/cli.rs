// tests/cli.rs
use std::fs;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_job_charts"))
}

#[test]
fn help_and_version_exit_zero() {
    let out = bin().arg("--help").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("--list-categories"));

    let out = bin().arg("-V").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("job_charts "));
}

#[test]
fn list_categories_prints_builtins() {
    let out = bin().arg("--list-categories").output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    let names: Vec<&str> = text.lines().collect();
    assert_eq!(names.first(), Some(&"SoftwareDEV"));
    assert!(names.contains(&"DevOps/SRE"));
}

#[test]
fn bad_arguments_exit_one() {
    let out = bin().arg("--nope").output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown arg"));
}

#[test]
fn missing_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = bin().arg(dir.path().join("absent.json")).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("charts_data.json").exists());
}

#[test]
fn full_run_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("jobs.json");
    fs::write(
        &input,
        r#"{ "data": [ { "company": "Acme", "title": "QA Automation Engineer", "description": "selenium, cypress; 3+ years experience" } ] }"#,
    )
    .unwrap();

    let out = bin().arg(&input).arg("-q").output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    // -q keeps stdout free of info lines
    assert!(out.stdout.is_empty());

    let charts: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("charts_data.json")).unwrap()).unwrap();
    assert_eq!(charts["byRoleType"][0]["label"], "SoftwareQA");
    assert!(dir.path().join("jobs.json.gz").exists());
}
