//! Runs the `cohesion` binary against the shared C++ fixtures.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/cpp")
        .join(name)
}

/// Run in `dir` so no stray `cohesion.toml` is picked up.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cohesion"))
        .args(args)
        .current_dir(dir)
        .env_remove("COHESION_LOG")
        .output()
        .expect("failed to spawn cohesion")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_name_then_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture("pair.cpp");
    let output = run_in(dir.path(), &[path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Pair\n    a   b\na 2/2 1/2\nb 1/1 1/1\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn nested_classes_follow_their_outer_class() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture("nested.cpp");
    let output = run_in(dir.path(), &[path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Outer\n    y\ny 1/1\nOuter::Inner\n    x\nx 1/1\n");
}

#[test]
fn no_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn two_paths_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture("pair.cpp");
    let p = path.to_str().unwrap();
    let output = run_in(dir.path(), &[p, p]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn unreadable_file_reports_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["missing.cpp"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("[IO_ERROR]"));
}

#[test]
fn project_config_file_is_honored_and_flags_win() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("cohesion.toml"),
        "[significance]\nmin_count = 1\nthreshold = 0.9\n",
    )
    .unwrap();
    let path = fixture("pair.cpp");
    let p = path.to_str().unwrap();

    let output = run_in(dir.path(), &["--significant", p]);
    let text = stdout(&output);
    assert!(text.contains("significant (min_count=1, threshold=0.9):"));
    assert!(text.contains("  b -> a: 1.00\n"));
    assert!(!text.contains("a -> b"));

    let output = run_in(dir.path(), &["--significant", "--threshold", "0.4", p]);
    assert!(stdout(&output).contains("  a -> b: 0.50\n"));
}

#[test]
fn invalid_config_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cohesion.toml"), "[significance]\nthreshold = 2.0\n").unwrap();
    let path = fixture("pair.cpp");

    let output = run_in(dir.path(), &[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("[CONFIG_ERROR]"));
}

#[test]
fn json_format_emits_one_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture("connection.cpp");
    let output = run_in(dir.path(), &["--format", "json", path.to_str().unwrap()]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["qualified_name"], "net::Connection");
    assert_eq!(value[0]["fields"], 3);
}

#[test]
fn syntax_errors_are_silent() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture("broken.cpp");
    let output = run_in(dir.path(), &[path.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Survivor\n"));
    assert!(output.stderr.is_empty());
}
