//! Intents: automatable actions attached to todo lines.
//!
//! A todo line may end with an `@action:` annotation:
//!
//! ```text
//! - [ ] Compile the paper @action: compile paper.tex
//! - [ ] Look up borrowck docs @action: search rust borrow checker
//! ```
//!
//! The [`parser`] extracts those annotations without judging them; turning a
//! parsed record into an [`Intent`] classifies the verb, and the
//! [`executor`] maps the intent onto a host command and runs it.

pub mod executor;
pub mod parser;

pub use executor::{resolve, run_intent};
pub use parser::{parse_actionable, parse_line, ActionableTodo};

use crate::error::{C9aiError, Result};
use std::fmt;
use std::str::FromStr;

/// The fixed set of actions a todo can automate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Open,
    Compile,
    Run,
    Search,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Open => "open",
            Verb::Compile => "compile",
            Verb::Run => "run",
            Verb::Search => "search",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = C9aiError;

    /// Verbs match case-insensitively (`Open`, `OPEN` and `open` are equal).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Verb::Open),
            "compile" => Ok(Verb::Compile),
            "run" => Ok(Verb::Run),
            "search" => Ok(Verb::Search),
            _ => Err(C9aiError::UnknownVerb(s.to_string())),
        }
    }
}

/// A classified `(verb, target)` pair ready for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub verb: Verb,
    pub target: String,
}

impl Intent {
    pub fn new(verb: Verb, target: impl Into<String>) -> Self {
        Self {
            verb,
            target: target.into(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} {}", self.verb, self.target)
    }
}
