//! Best-effort extraction of `@action:` annotations.
//!
//! Lines that don't carry an annotation are not errors; they simply yield
//! nothing.

use super::{Intent, Verb};
use crate::error::Result;
use crate::todo::PENDING_MARKER;
use regex::Regex;
use std::sync::OnceLock;

const ACTION_TAG: &str = "@action:";

fn action_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"@action:\s*(\w+)\s*(.*)").ok())
        .as_ref()
}

/// One annotated todo line, exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionableTodo {
    /// Description before the annotation, checkbox stripped.
    pub task: String,
    /// Verb as written (case preserved).
    pub verb: String,
    pub target: String,
}

impl ActionableTodo {
    /// Classify the verb. Fails for verbs outside the fixed set.
    pub fn intent(&self) -> Result<Intent> {
        let verb: Verb = self.verb.parse()?;
        Ok(Intent::new(verb, self.target.clone()))
    }
}

/// Parse a single line. `None` means the line has no usable annotation.
pub fn parse_line(line: &str) -> Option<ActionableTodo> {
    let caps = action_pattern()?.captures(line)?;

    let before = line.split(ACTION_TAG).next().unwrap_or_default();
    let task = before.replacen(PENDING_MARKER, "", 1).trim().to_string();

    Some(ActionableTodo {
        task,
        verb: caps[1].to_string(),
        target: caps[2].trim().to_string(),
    })
}

/// Parse every annotated line of a todo file, in file order.
pub fn parse_actionable(content: &str) -> Vec<ActionableTodo> {
    content.lines().filter_map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pending_line() {
        let todo = parse_line("- [ ] Compile the paper @action: compile paper.tex").unwrap();
        assert_eq!(todo.task, "Compile the paper");
        assert_eq!(todo.verb, "compile");
        assert_eq!(todo.target, "paper.tex");
    }

    #[test]
    fn test_parse_preserves_verb_case_and_trims_target() {
        let todo = parse_line("Budget @action:Open   budget.xlsx   ").unwrap();
        assert_eq!(todo.task, "Budget");
        assert_eq!(todo.verb, "Open");
        assert_eq!(todo.target, "budget.xlsx");
    }

    #[test]
    fn test_parse_target_with_spaces() {
        let todo = parse_line("- [ ] learn @action: search rust borrow checker").unwrap();
        assert_eq!(todo.target, "rust borrow checker");
    }

    #[test]
    fn test_parse_empty_target() {
        let todo = parse_line("- [ ] @action: run").unwrap();
        assert_eq!(todo.task, "");
        assert_eq!(todo.verb, "run");
        assert_eq!(todo.target, "");
    }

    #[test]
    fn test_lines_without_annotation_are_skipped() {
        assert!(parse_line("- [ ] buy milk").is_none());
        assert!(parse_line("@action:").is_none());
        assert!(parse_line("@action:   ").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_completed_line_keeps_checkbox_text() {
        let todo = parse_line("- [x] done thing @action: open notes.md").unwrap();
        assert_eq!(todo.task, "- [x] done thing");
    }

    #[test]
    fn test_parse_actionable_in_order() {
        let content = "# Todos\n\
                       - [ ] a @action: open a.txt\n\
                       - [ ] plain task\n\
                       - [ ] b @action: search b\n";
        let todos = parse_actionable(content);
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].task, "a");
        assert_eq!(todos[1].task, "b");
    }

    #[test]
    fn test_intent_conversion() {
        let todo = parse_line("- [ ] x @action: SEARCH foo").unwrap();
        assert_eq!(todo.intent().unwrap(), Intent::new(Verb::Search, "foo"));

        let todo = parse_line("- [ ] x @action: email bob").unwrap();
        assert!(todo.intent().is_err());
    }
}
