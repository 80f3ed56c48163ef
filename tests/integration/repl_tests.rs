use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the interactive shell with `input` piped to stdin.
fn repl(input: &str) -> (TempDir, TempDir, assert_cmd::assert::Assert) {
    let home = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("c9ai"))
        .env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .current_dir(cwd.path())
        .write_stdin(input)
        .assert();
    (home, cwd, assert)
}

#[cfg(unix)]
#[test]
fn test_shell_passthrough() {
    let (_home, _cwd, assert) = repl("!echo hi-from-shell\nexit\n");
    assert
        .success()
        .stdout(predicate::str::contains("hi-from-shell"))
        .stdout(predicate::str::contains("Thanks for using C9 AI"));
}

#[cfg(unix)]
#[test]
fn test_shell_non_zero_exit_is_reported() {
    let (_home, _cwd, assert) = repl("!exit 3\nexit\n");
    assert
        .success()
        .stdout(predicate::str::contains("[c9ai: Command exited with code 3]"));
}

#[test]
fn test_unknown_command() {
    let (_home, _cwd, assert) = repl("badcommand xyz\nexit\n");
    assert
        .success()
        .stdout(predicate::str::contains("Unknown command: \"badcommand\""));
}

#[test]
fn test_suggestion_for_near_miss() {
    let (_home, _cwd, assert) = repl("create a reminder\n");
    assert
        .success()
        .stdout(predicate::str::contains("Did you mean: todos add <task>"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let (home, _cwd, assert) = repl("help\n");
    assert
        .success()
        .stdout(predicate::str::contains("C9 AI Help"));
    assert!(home.path().join(".c9ai").join("config.json").exists());
}

#[test]
fn test_errors_do_not_end_the_session() {
    let (_home, _cwd, assert) = repl("switch gpt\nconfig\nexit\n");
    assert
        .success()
        .stderr(predicate::str::contains("Invalid model: gpt"))
        .stdout(predicate::str::contains("Default AI model: CLAUDE"));
}

#[cfg(unix)]
#[test]
fn test_cd_changes_directory_for_later_commands() {
    let target = TempDir::new().unwrap();
    let input = format!("!cd {}\nadd Visit the museum\nexit\n", target.path().display());

    let (_home, cwd, assert) = repl(&input);
    assert
        .success()
        .stdout(predicate::str::contains("Changed directory to:"));

    assert!(target.path().join("todo.md").exists());
    assert!(!cwd.path().join("todo.md").exists());
}
