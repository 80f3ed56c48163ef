use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `c9ai` command with its own home and working directory.
fn c9ai(home: &TempDir, cwd: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("c9ai"));
    cmd.env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env_remove("RUST_LOG")
        .current_dir(cwd.path());
    cmd
}

#[test]
fn test_help_output() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("c9ai"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Autonomous AI-powered productivity shell"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("todos"));
}

#[test]
fn test_version_format() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("c9ai"));
    cmd.arg("--version");

    let output = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);

    // "c9ai X.Y.Z" or "c9ai X.Y.Z-dev+hash[.dirty]"
    assert!(stdout.starts_with("c9ai "));
    let version = stdout.trim().trim_start_matches("c9ai ");
    assert!(version.split('.').count() >= 3);
}

#[test]
fn test_switch_then_config() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    c9ai(&home, &cwd)
        .args(["switch", "gemini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to GEMINI"));

    c9ai(&home, &cwd)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default AI model: GEMINI"))
        .stdout(predicate::str::contains("Max iterations: 20"));
}

#[test]
fn test_switch_invalid_model_fails() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    c9ai(&home, &cwd)
        .args(["switch", "gpt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid model: gpt"));
}

#[test]
fn test_todos_add_writes_todo_file() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    c9ai(&home, &cwd)
        .args(["todos", "add", "Learn", "Rust", "macros"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task: \"Learn Rust macros\""));

    let content = std::fs::read_to_string(cwd.path().join("todo.md")).unwrap();
    assert_eq!(
        content,
        "- [ ] Learn Rust macros @action: search learn_rust_macros\n"
    );
}

#[test]
fn test_todos_actions_lists_annotations() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    std::fs::write(
        cwd.path().join("todo.md"),
        "- [ ] Paper @action: compile paper.tex\n- [ ] Plain task\n",
    )
    .unwrap();

    c9ai(&home, &cwd)
        .args(["todos", "actions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Paper"))
        .stdout(predicate::str::contains("└─ @compile paper.tex"))
        .stdout(predicate::str::contains("Plain task").not());
}

#[test]
fn test_models_list_shows_catalog() {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    c9ai(&home, &cwd)
        .args(["models", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("phi-3"))
        .stdout(predicate::str::contains("tinyllama"))
        .stdout(predicate::str::contains("llama"));
}

#[cfg(unix)]
#[test]
fn test_tools_lists_executables() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    let tools = home.path().join(".c9ai").join("tools");
    std::fs::create_dir_all(&tools).unwrap();
    let script = tools.join("cleanup.sh");
    std::fs::write(&script, "#!/bin/sh\necho clean\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    c9ai(&home, &cwd)
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleanup.sh"));
}
