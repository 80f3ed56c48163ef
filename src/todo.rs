//! The flat `todo.md` file in the working directory.
//!
//! The store only ever appends. Lines are never edited or removed, and no
//! lock is taken: two shells writing at once may interleave.

use crate::error::Result;
use crate::intent::{self, ActionableTodo};
use crate::interpret;
use crate::model::Model;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TODO_FILE_NAME: &str = "todo.md";

/// Prefix of a pending (unchecked) task.
pub const PENDING_MARKER: &str = "- [ ]";

#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    /// Store for `todo.md` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(TODO_FILE_NAME),
        }
    }

    /// Store for the process's current working directory.
    pub fn current() -> Result<Self> {
        Ok(Self::in_dir(&std::env::current_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole file contents; empty when the file doesn't exist yet.
    pub fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        Ok(std::fs::read_to_string(&self.path)?)
    }

    /// Append one line, creating the file if needed.
    pub fn append(&self, line: &str) -> Result<()> {
        let needs_separator = match std::fs::read(&self.path) {
            Ok(bytes) => bytes.last().is_some_and(|b| *b != b'\n'),
            Err(_) => false,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if needs_separator {
            file.write_all(b"\n")?;
        }
        writeln!(file, "{}", line.trim_end_matches(['\r', '\n']))?;
        Ok(())
    }

    /// Lines starting with the pending checkbox, in file order.
    pub fn list_pending(&self) -> Result<Vec<String>> {
        Ok(self
            .read()?
            .lines()
            .filter(|line| line.starts_with(PENDING_MARKER))
            .map(str::to_string)
            .collect())
    }

    /// Annotated lines, freshly parsed on every call.
    pub fn actionable(&self) -> Result<Vec<ActionableTodo>> {
        Ok(intent::parse_actionable(&self.read()?))
    }
}

/// How a free-text task was turned into a todo line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEntry {
    /// Already carries `@action:`.
    Structured { task: String },
    /// Shorthand `description @verb target`.
    Annotated { description: String, action: String },
    /// Action proposed for a plain-language task.
    Suggested {
        task: String,
        action: String,
        source: Model,
    },
    /// No action attached.
    Plain { task: String },
}

impl TaskEntry {
    /// Decide the todo line for `task`.
    ///
    /// Plain-language tasks get an action suggested by the local rule table
    /// when the local model is selected and installed, or a web search when a
    /// cloud model is selected.
    pub fn compose(task: &str, model: Model, local_model_ready: bool) -> Self {
        let task = task.trim();

        if task.contains("@action:") {
            return TaskEntry::Structured {
                task: task.to_string(),
            };
        }

        if let Some((description, action)) = task.split_once('@') {
            return TaskEntry::Annotated {
                description: description.trim().to_string(),
                action: action.trim().to_string(),
            };
        }

        match model {
            Model::Local if local_model_ready => TaskEntry::Suggested {
                task: task.to_string(),
                action: interpret::suggest_action(task),
                source: model,
            },
            Model::Claude | Model::Gemini => TaskEntry::Suggested {
                task: task.to_string(),
                action: format!("search {}", search_slug(task)),
                source: model,
            },
            Model::Local => TaskEntry::Plain {
                task: task.to_string(),
            },
        }
    }

    pub fn line(&self) -> String {
        match self {
            TaskEntry::Structured { task } | TaskEntry::Plain { task } => {
                format!("{} {}", PENDING_MARKER, task)
            }
            TaskEntry::Annotated {
                description,
                action,
            } => format!("{} {} @action: {}", PENDING_MARKER, description, action),
            TaskEntry::Suggested { task, action, .. } => {
                format!("{} {} @action: {}", PENDING_MARKER, task, action)
            }
        }
    }
}

fn search_slug(task: &str) -> String {
    task.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
