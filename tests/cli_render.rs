mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::{Value, json};

#[test]
fn render_prints_merged_single_story() {
    let ctx = TestContext::new();
    ctx.write_template("t.json", r#"{"project_slug": "demo", "subject": "Deploy to {env}"}"#);
    let payload = ctx.write_payload(
        r#"{"filename": "t.json", "data": {"tags": ["ops"]}, "string_replacement": {"env": "prod"}}"#,
    );

    let output = ctx.cli().arg("render").arg(&payload).assert().success().get_output().clone();
    let document: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(
        document,
        json!({"project_slug": "demo", "subject": "Deploy to prod", "tags": ["ops"]})
    );
}

#[test]
fn render_keeps_batch_shape_and_order() {
    let ctx = TestContext::new();
    ctx.write_template(
        "batch.json",
        r#"{"user_stories": [
            {"project_slug": "demo", "subject": "A", "tasks": [{"subject": "A.1", "order": 1}]},
            {"project_slug": "demo", "subject": "B"}
        ]}"#,
    );
    let payload = ctx.write_payload(r#"{"filename": "batch.json", "data": {"assignee": "ana"}}"#);

    let output = ctx.cli().arg("render").arg(&payload).assert().success().get_output().clone();
    let document: Value = serde_json::from_slice(&output.stdout).unwrap();

    let stories = document["user_stories"].as_array().unwrap();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0]["subject"], "A");
    assert_eq!(stories[0]["tasks"][0]["order"], 1);
    assert_eq!(stories[1]["assignee"], "ana");
}

#[test]
fn render_reports_missing_filename() {
    let ctx = TestContext::new();
    let payload = ctx.write_payload(r#"{"data": {"subject": "x"}}"#);

    ctx.cli()
        .arg("render")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing 'filename' attribute in the HTTP payload"));
}

#[test]
fn render_reports_missing_template() {
    let ctx = TestContext::new();
    let payload = ctx.write_payload(r#"{"filename": "absent.json"}"#);

    ctx.cli()
        .arg("render")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File 'absent.json' not found"));
}

#[test]
fn render_rejects_traversal_outside_template_directory() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("secret.json"), r#"{"project_slug": "p", "subject": "s"}"#)
        .unwrap();
    let payload = ctx.write_payload(r#"{"filename": "../secret.json"}"#);

    ctx.cli()
        .arg("render")
        .arg(&payload)
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the template directory"));
}

#[test]
fn explicit_config_flag_selects_template_directory() {
    let ctx = TestContext::new();
    std::fs::create_dir_all(ctx.work_dir().join("other")).unwrap();
    std::fs::write(
        ctx.work_dir().join("other/t.json"),
        r#"{"project_slug": "demo", "subject": "from other"}"#,
    )
    .unwrap();
    std::fs::write(ctx.work_dir().join("other.toml"), "[templates]\nbase_dir = \"other\"\n")
        .unwrap();
    let payload = ctx.write_payload(r#"{"filename": "t.json"}"#);

    ctx.cli()
        .args(["--config", "other.toml", "render"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("from other"));
}
