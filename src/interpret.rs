//! Fixed keyword rules for plain-language input.
//!
//! There is no inference here: each rule is a keyword test, and anything
//! the table doesn't cover is reported as unknown.

use crate::platform::Platform;
use crate::session::HostCommand;
use crate::utils::shell::escape;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// A plain-language request recognised as a host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellIntent {
    ListFiles { path: String },
    DiskUsage,
    ShowProcesses,
}

impl ShellIntent {
    pub fn name(&self) -> &'static str {
        match self {
            ShellIntent::ListFiles { .. } => "list_files",
            ShellIntent::DiskUsage => "disk_usage",
            ShellIntent::ShowProcesses => "show_processes",
        }
    }

    /// Shell command line carrying out the request.
    pub fn command_line(&self, platform: Platform) -> String {
        match (self, platform) {
            (ShellIntent::ListFiles { path }, Platform::Windows) => format!("dir \"{}\"", path),
            (ShellIntent::ListFiles { path }, _) => format!("ls -la {}", escape(path)),
            (ShellIntent::DiskUsage, Platform::Windows) => {
                "wmic logicaldisk get caption,freespace,size".to_string()
            }
            (ShellIntent::DiskUsage, _) => "df -h".to_string(),
            (ShellIntent::ShowProcesses, Platform::Windows) => "tasklist".to_string(),
            (ShellIntent::ShowProcesses, _) => "ps aux | head -20".to_string(),
        }
    }

    /// Command to spawn. A listing path from user text never reaches a Unix
    /// shell; it is passed to `ls` as a plain argument.
    pub fn host_command(&self, platform: Platform) -> HostCommand {
        match (self, platform) {
            (ShellIntent::ListFiles { path }, Platform::MacOs | Platform::Linux) => {
                HostCommand::new("ls", ["-la", path.as_str()])
            }
            _ => HostCommand::shell(&self.command_line(platform)),
        }
    }
}

fn absolute_path_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/[^\s]+").ok()).as_ref()
}

fn search_term_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"search.*?for\s+(.+?)(?:\s|$)").ok())
        .as_ref()
}

/// Match `input` against the rule table. `cwd` is the default listing target.
pub fn interpret(input: &str, cwd: &Path) -> Option<ShellIntent> {
    let lower = input.to_lowercase();
    let has = |word: &str| lower.contains(word);

    if has("list") && (has("files") || has("documents")) {
        let path = absolute_path_pattern()
            .and_then(|re| re.find(input))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| cwd.display().to_string());
        return Some(ShellIntent::ListFiles { path });
    }

    if has("check") && has("disk") {
        return Some(ShellIntent::DiskUsage);
    }

    if has("show") && has("process") {
        return Some(ShellIntent::ShowProcesses);
    }

    None
}

/// A built-in the user probably meant, for input no rule matched.
pub fn suggest(input: &str) -> Option<&'static str> {
    let lower = input.to_lowercase();
    let has = |word: &str| lower.contains(word);

    if has("list") || has("show") {
        Some("todos list  (to show todos)")
    } else if has("add") || has("create") {
        Some("todos add <task>  (to add a todo)")
    } else if has("model") {
        Some("models list  (to show available models)")
    } else if has("help") {
        Some("help  (to show available commands)")
    } else {
        None
    }
}

/// Propose a `verb target` action for a plain-language task.
///
/// This is the rule table used when the local model is selected.
pub fn suggest_action(task: &str) -> String {
    let lower = task.to_lowercase();
    let has = |word: &str| lower.contains(word);

    if has("compile") && has("research") {
        "compile research_paper.tex".to_string()
    } else if has("open") && has("budget") {
        "open budget.xlsx".to_string()
    } else if has("check") && has("github") {
        "open https://github.com/issues".to_string()
    } else if has("run") && has("cleanup") {
        "run cleanup-weekly.sh".to_string()
    } else if has("search") {
        let term = search_term_pattern()
            .and_then(|re| re.captures(&lower))
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| "tutorial".to_string());
        format!("search {}", term)
    } else if has("compile") {
        "compile document.tex".to_string()
    } else if has("open") {
        let ext = if has("spreadsheet") { "xlsx" } else { "txt" };
        format!("open file.{}", ext)
    } else {
        let last = lower.split_whitespace().last().unwrap_or("file");
        format!("open {}.txt", last)
    }
}
