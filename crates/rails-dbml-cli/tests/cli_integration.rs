use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the rails-dbml binary command.
#[allow(deprecated)]
fn rails_dbml() -> Command {
    let mut cmd = Command::cargo_bin("rails-dbml").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("NO_COLOR");
    cmd
}

const SCHEMA: &str = r#"# auto-generated
ActiveRecord::Schema.define(version: 1) do

  create_table "users", id: :integer, force: :cascade do |t|
    t.string "email", limit: 255, null: false
    t.datetime "created_at", default: -> { "CURRENT_TIMESTAMP" }
    t.geometry "home"
  end

end
"#;

fn write_schema(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("schema.rb");
    fs::write(&path, contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Help and version tests
// ---------------------------------------------------------------------------

#[test]
fn help_exits_zero() {
    rails_dbml()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert a Rails migration schema into DBML"));
}

#[test]
fn version_exits_zero() {
    rails_dbml()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rails-dbml"));
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

#[test]
fn no_arguments_prints_usage() {
    rails_dbml()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: rails-dbml <SRC_FILE> <TGT_FILE>"));
}

#[test]
fn unknown_flag_is_invalid_arguments() {
    rails_dbml()
        .args(["--frobnicate", "a.rb", "b.dbml"])
        .assert()
        .code(2);
}

#[test]
fn quiet_and_verbose_conflict() {
    rails_dbml()
        .args(["-q", "-v", "a.rb", "b.dbml"])
        .assert()
        .code(2);
}

#[test]
fn one_argument_prints_usage() {
    rails_dbml()
        .arg("schema.rb")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

#[test]
fn converts_schema_file() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("schema.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ok wrote 7 DBML lines"));

    let dbml = fs::read_to_string(&target).unwrap();
    assert_eq!(
        dbml,
        "Table \"users\" {\n\
         \x20 id unsigned [pk, increment]\n\
         \x20 email varchar(255) [not null]\n\
         \x20 created_at datetime [default: `CURRENT_TIMESTAMP`]\n\
         \x20 home undefined // Unsupported type <t.geometry>. Please check the original source: [7]     t.geometry \"home\"\n\
         }\n\
         }\n"
    );
}

#[test]
fn warnings_are_reported_in_human_mode() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("schema.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: line 7: unsupported type <t.geometry>",
        ));
}

#[test]
fn quiet_suppresses_success_message() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("schema.dbml");

    rails_dbml()
        .args(["-q", source.to_str().unwrap(), target.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    assert!(target.exists());
}

#[test]
fn default_log_level_shows_soft_diagnostics() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("schema.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("line=7"))
        .stderr(predicate::str::contains("conversion finished").not());
}

#[test]
fn verbose_logs_conversion_summary() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("schema.dbml");

    rails_dbml()
        .args(["-v", source.to_str().unwrap(), target.to_str().unwrap(), "--no-color"])
        .assert()
        .success()
        .stderr(predicate::str::contains("conversion finished"));
}

#[test]
fn latin1_source_is_converted() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("schema.rb");
    fs::write(&source, b"# caf\xe9\ncreate_table \"u\" do |t|\nend\n").unwrap();
    let target = dir.path().join("schema.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "Table \"u\" {\n}\n");
}

#[test]
fn json_report() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("schema.dbml");

    let assert = rails_dbml()
        .args([
            "--format",
            "json",
            source.to_str().unwrap(),
            target.to_str().unwrap(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["lines_read"], 10);
    assert_eq!(report["lines_emitted"], 7);
    assert_eq!(report["warnings"][0]["line"], 7);
    assert_eq!(report["warnings"][0]["kind"], "unsupported_type");
    assert_eq!(report["warnings"][0]["keyword"], "t.geometry");
}

#[test]
fn plain_summary() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("schema.dbml");

    rails_dbml()
        .args([
            "--format",
            "plain",
            source.to_str().unwrap(),
            target.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t10\t7\t1"));
}

#[test]
fn empty_source_writes_empty_target() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, "");
    let target = dir.path().join("empty.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&target).unwrap(), "");
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn missing_source_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("missing.rb");
    let target = dir.path().join("out.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap(), "--no-color"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.rb"));

    assert!(!target.exists());
}

#[test]
fn malformed_parameter_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(
        &dir,
        "create_table \"a\" do |t|\n  t.string \"b\", limit 40\nend\n",
    );
    let target = dir.path().join("out.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap(), "--no-color"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed parameter 'limit'"));

    assert!(!target.exists());
}

#[test]
fn malformed_parameter_json_error() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, "t.string \"b\", limit 40\n");
    let target = dir.path().join("out.dbml");

    rails_dbml()
        .args([
            "--format",
            "json",
            source.to_str().unwrap(),
            target.to_str().unwrap(),
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"parse_error\""));
}

#[test]
fn unwritable_target_fails() {
    let dir = TempDir::new().unwrap();
    let source = write_schema(&dir, SCHEMA);
    let target = dir.path().join("missing-dir").join("out.dbml");

    rails_dbml()
        .args([source.to_str().unwrap(), target.to_str().unwrap(), "--no-color"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}
