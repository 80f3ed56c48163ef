use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum C9aiError {
    #[error("Unknown intent verb: {0}")]
    UnknownVerb(String),

    #[error("Unsupported compile target: {0}")]
    UnsupportedTarget(String),

    #[error("Script not found: {0}")]
    ScriptNotFound(String),

    #[error("Invalid model: {0}. Choose from: claude, gemini, local")]
    InvalidModel(String),

    #[error("{0} has no interactive CLI session")]
    NoInteractiveSession(String),

    #[error("'{0}' is not installed or not in your PATH")]
    ToolNotInstalled(String),

    #[error("Command exited with status {0}")]
    CommandExitCode(i32),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Home directory could not be determined")]
    NoHomeDir,

    #[error("Unknown model: {0}. Available models: phi-3, tinyllama, llama")]
    UnknownCatalogModel(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Config serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ureq::Error> for C9aiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => {
                C9aiError::Download(format!("HTTP {}: {}", code, response.status_text()))
            }
            other => C9aiError::Download(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, C9aiError>;
