//! AI model selection.

use crate::error::{C9aiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The model the shell routes AI work to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    #[default]
    Claude,
    Gemini,
    Local,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Claude, Model::Gemini, Model::Local];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Claude => "claude",
            Model::Gemini => "gemini",
            Model::Local => "local",
        }
    }

    /// Name of the external CLI that hosts interactive sessions for this model.
    /// Local models are loaded in-process and have no CLI.
    pub fn cli_binary(&self) -> Option<&'static str> {
        match self {
            Model::Claude => Some("claude"),
            Model::Gemini => Some("gemini"),
            Model::Local => None,
        }
    }

    /// Parse a model that can host an interactive session (`@claude`, `@gemini`).
    pub fn parse_session(name: &str) -> Option<Model> {
        match name.to_lowercase().as_str() {
            "claude" => Some(Model::Claude),
            "gemini" => Some(Model::Gemini),
            _ => None,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = C9aiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "claude" => Ok(Model::Claude),
            "gemini" => Ok(Model::Gemini),
            "local" => Ok(Model::Local),
            other => Err(C9aiError::InvalidModel(other.to_string())),
        }
    }
}
