//! Classify one line of shell input.
//!
//! Order matters: exit words, `!` passthrough, `@model` sessions, built-in
//! first words, and finally natural language.

use crate::model::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `claude <prompt>` / `gemini <prompt>`
    Ask(Model),
    Switch,
    Todos,
    /// `add <task>`, same as `todos add <task>`
    Add,
    Analytics,
    Tools,
    Models,
    Config,
    Help,
    Logo,
}

impl Builtin {
    fn from_word(word: &str) -> Option<Self> {
        let builtin = match word.to_lowercase().as_str() {
            "claude" => Builtin::Ask(Model::Claude),
            "gemini" => Builtin::Ask(Model::Gemini),
            "switch" => Builtin::Switch,
            "todos" => Builtin::Todos,
            "add" => Builtin::Add,
            "analytics" => Builtin::Analytics,
            "tools" => Builtin::Tools,
            "models" => Builtin::Models,
            "config" => Builtin::Config,
            "help" => Builtin::Help,
            "logo" | "banner" => Builtin::Logo,
            _ => return None,
        };
        Some(builtin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Empty,
    Exit,
    /// `!cd [dir]`
    ChangeDir(Option<String>),
    /// `!<command line>`
    Shell(String),
    /// `@claude` / `@gemini`
    AiSession(Model),
    Builtin(Builtin, Vec<String>),
    NaturalLanguage(String),
}

pub fn classify(input: &str) -> Route {
    let input = input.trim();
    if input.is_empty() {
        return Route::Empty;
    }

    let lower = input.to_lowercase();
    if lower == "exit" || lower == "quit" {
        return Route::Exit;
    }

    if let Some(rest) = input.strip_prefix('!') {
        return shell_route(rest.trim());
    }

    if let Some(name) = input.strip_prefix('@') {
        // `@local` has no CLI; it falls through to natural language.
        let first = name.split_whitespace().next().unwrap_or_default();
        if let Some(model) = Model::parse_session(first) {
            return Route::AiSession(model);
        }
    }

    let mut words = input.split_whitespace();
    if let Some(builtin) = words.next().and_then(Builtin::from_word) {
        return Route::Builtin(builtin, words.map(str::to_string).collect());
    }

    Route::NaturalLanguage(input.to_string())
}

fn shell_route(line: &str) -> Route {
    let mut parts = line.splitn(2, char::is_whitespace);
    if parts.next() == Some("cd") {
        let dir = parts
            .next()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        return Route::ChangeDir(dir);
    }
    Route::Shell(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_words() {
        assert_eq!(classify("exit"), Route::Exit);
        assert_eq!(classify("  QUIT "), Route::Exit);
        assert_eq!(classify("   "), Route::Empty);
    }

    #[test]
    fn test_shell_passthrough() {
        assert_eq!(classify("!ls -l"), Route::Shell("ls -l".to_string()));
        assert_eq!(classify("! echo hi"), Route::Shell("echo hi".to_string()));
    }

    #[test]
    fn test_cd_needs_word_boundary() {
        assert_eq!(classify("!cd"), Route::ChangeDir(None));
        assert_eq!(
            classify("!cd /tmp"),
            Route::ChangeDir(Some("/tmp".to_string()))
        );
        assert_eq!(classify("!cdk deploy"), Route::Shell("cdk deploy".to_string()));
    }

    #[test]
    fn test_ai_sessions() {
        assert_eq!(classify("@claude"), Route::AiSession(Model::Claude));
        assert_eq!(classify("@Gemini"), Route::AiSession(Model::Gemini));
        assert_eq!(
            classify("@claude explain this repo"),
            Route::AiSession(Model::Claude)
        );
        assert_eq!(classify("@gemini  x"), Route::AiSession(Model::Gemini));
        assert_eq!(
            classify("@local"),
            Route::NaturalLanguage("@local".to_string())
        );
    }

    #[test]
    fn test_builtins_take_remaining_words() {
        assert_eq!(
            classify("todos add buy milk"),
            Route::Builtin(
                Builtin::Todos,
                vec!["add".to_string(), "buy".to_string(), "milk".to_string()]
            )
        );
        assert_eq!(
            classify("Claude explain lifetimes"),
            Route::Builtin(
                Builtin::Ask(Model::Claude),
                vec!["explain".to_string(), "lifetimes".to_string()]
            )
        );
        assert_eq!(classify("banner"), Route::Builtin(Builtin::Logo, vec![]));
    }

    #[test]
    fn test_natural_language_fallback() {
        assert_eq!(
            classify("list files in /tmp"),
            Route::NaturalLanguage("list files in /tmp".to_string())
        );
    }
}
