/// Intent parsing and resolution against a real tools directory.
use c9ai::error::C9aiError;
use c9ai::intent::{self, Intent, Verb};
use c9ai::platform::Platform;
use tempfile::TempDir;

const TODO_FILE: &str = "\
# Week
- [ ] Write paper @action: compile paper.tex
- [ ] Call the bank
- [x] Done already @action: open notes.txt
- [ ] Find docs @action: search rust lifetimes
- [ ] Broken @action: dance now
";

#[test]
fn test_parse_actionable_keeps_file_order() {
    let todos = intent::parse_actionable(TODO_FILE);
    let verbs: Vec<_> = todos.iter().map(|t| t.verb.as_str()).collect();
    assert_eq!(verbs, vec!["compile", "open", "search", "dance"]);

    assert_eq!(todos[0].task, "Write paper");
    assert_eq!(todos[0].target, "paper.tex");
    assert_eq!(todos[2].target, "rust lifetimes");
}

#[test]
fn test_unknown_verb_fails_at_intent_time() {
    let todos = intent::parse_actionable(TODO_FILE);
    let err = todos[3].intent().unwrap_err();
    assert!(matches!(err, C9aiError::UnknownVerb(ref v) if v == "dance"));
}

#[test]
fn test_resolve_search_encodes_query() {
    let tools = TempDir::new().unwrap();
    let cmd = intent::resolve(
        &Intent::new(Verb::Search, "rust lifetimes & borrows"),
        Platform::Linux,
        tools.path(),
    )
    .unwrap();

    assert_eq!(cmd.program, "xdg-open");
    assert_eq!(
        cmd.args,
        vec!["https://www.google.com/search?q=rust%20lifetimes%20%26%20borrows"]
    );
}

#[test]
fn test_resolve_compile_requires_tex() {
    let tools = TempDir::new().unwrap();
    let err = intent::resolve(
        &Intent::new(Verb::Compile, "notes.md"),
        Platform::MacOs,
        tools.path(),
    )
    .unwrap_err();
    assert!(matches!(err, C9aiError::UnsupportedTarget(_)));

    let cmd = intent::resolve(
        &Intent::new(Verb::Compile, "paper.tex"),
        Platform::MacOs,
        tools.path(),
    )
    .unwrap();
    assert_eq!(cmd.program, "pdflatex");
    assert_eq!(cmd.args, vec!["paper.tex"]);
}

#[test]
fn test_resolve_run_uses_interpreter_by_extension() {
    let tools = TempDir::new().unwrap();
    std::fs::write(tools.path().join("cleanup.sh"), "echo hi\n").unwrap();
    std::fs::write(tools.path().join("report.py"), "print(1)\n").unwrap();

    let sh = intent::resolve(
        &Intent::new(Verb::Run, "cleanup.sh"),
        Platform::Linux,
        tools.path(),
    )
    .unwrap();
    assert_eq!(sh.program, "bash");
    assert_eq!(sh.args, vec![tools.path().join("cleanup.sh").display().to_string()]);

    let py = intent::resolve(
        &Intent::new(Verb::Run, "report.py"),
        Platform::Linux,
        tools.path(),
    )
    .unwrap();
    assert_eq!(py.program, "python3");
}

#[test]
fn test_resolve_run_missing_script() {
    let tools = TempDir::new().unwrap();
    let err = intent::resolve(
        &Intent::new(Verb::Run, "missing.sh"),
        Platform::Linux,
        tools.path(),
    )
    .unwrap_err();
    assert!(matches!(err, C9aiError::ScriptNotFound(_)));
}

#[cfg(unix)]
#[test]
fn test_run_intent_reports_script_failure() {
    let tools = TempDir::new().unwrap();
    std::fs::write(tools.path().join("fail.sh"), "echo nope >&2\nexit 2\n").unwrap();

    let result = intent::run_intent(
        &Intent::new(Verb::Run, "fail.sh"),
        Platform::Linux,
        tools.path(),
    );
    assert!(result.is_err());
}

#[test]
fn test_reparsing_yields_equal_independent_sequences() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("todo.md"), TODO_FILE).unwrap();
    let store = c9ai::todo::TodoStore::in_dir(dir.path());

    let first = store.actionable().unwrap();
    let mut second = store.actionable().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, intent::parse_actionable(TODO_FILE));

    second[0].target.push_str(".bak");
    second.pop();

    assert_eq!(first.len(), 4);
    assert_eq!(first[0].target, "paper.tex");
    assert_ne!(first, second);
}
