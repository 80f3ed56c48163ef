//! Child process sessions.
//!
//! Every subprocess the shell starts goes through this module. A session
//! either inherits the terminal (interactive tools, shell passthrough,
//! intents) or captures stdout for printing afterwards. Calls block until
//! the child exits, so at most one child is alive at a time.

use crate::error::{C9aiError, Result};
use crate::utils::shell::display_command;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// A program plus arguments, resolved but not yet started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl HostCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Run a full command line through the host shell.
    pub fn shell(line: &str) -> Self {
        if cfg!(windows) {
            Self::new("cmd", ["/C", line])
        } else {
            Self::new("sh", ["-c", line])
        }
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_command(&self.program, &self.args))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Child shares the terminal with the shell.
    Inherit,
    /// Stdout and stderr are collected.
    Capture,
}

/// Result of one finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Trimmed stdout, present only for captured sessions.
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl SessionOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Human-readable exit code (`signal` when there is none).
    pub fn code_label(&self) -> String {
        self.exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string())
    }
}

/// Start `command` and block until it exits.
///
/// Only spawn failures are errors; a non-zero exit is reported in the outcome.
pub fn run(command: &HostCommand, mode: StdioMode) -> Result<SessionOutcome> {
    tracing::debug!(command = %command, ?mode, "starting session");

    let mut cmd = command.to_command();
    let outcome = match mode {
        StdioMode::Inherit => {
            let status = cmd.status().map_err(|e| spawn_error(command, e))?;
            SessionOutcome {
                exit_code: status.code(),
                stdout: None,
                stderr: None,
            }
        }
        StdioMode::Capture => {
            let output = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(|e| spawn_error(command, e))?;
            SessionOutcome {
                exit_code: output.status.code(),
                stdout: Some(String::from_utf8_lossy(&output.stdout).trim().to_string()),
                stderr: Some(String::from_utf8_lossy(&output.stderr).trim().to_string()),
            }
        }
    };

    tracing::debug!(command = %command, exit_code = ?outcome.exit_code, "session finished");
    Ok(outcome)
}

/// Like [`run`], but a non-zero exit becomes an error.
///
/// Captured sessions carry stderr (or stdout) in the error message.
pub fn run_checked(command: &HostCommand, mode: StdioMode) -> Result<SessionOutcome> {
    let outcome = run(command, mode)?;
    if outcome.success() {
        return Ok(outcome);
    }

    let detail = outcome
        .stderr
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| outcome.stdout.as_deref().filter(|s| !s.is_empty()));

    match (detail, outcome.exit_code) {
        (Some(detail), _) => Err(C9aiError::CommandFailed(detail.to_string())),
        (None, Some(code)) => Err(C9aiError::CommandExitCode(code)),
        (None, None) => Err(C9aiError::CommandFailed(format!(
            "{} was terminated by a signal",
            command
        ))),
    }
}

/// Run `command` silently and report whether it succeeded within `timeout`.
///
/// A child that outlives the timeout is killed.
pub fn probe(command: &HostCommand, timeout: Duration) -> bool {
    let child = command
        .to_command()
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let Ok(mut child) = child else {
        return false;
    };

    match child.wait_timeout(timeout) {
        Ok(Some(status)) => status.success(),
        Ok(None) => {
            tracing::debug!(command = %command, "probe timed out");
            let _ = child.kill();
            let _ = child.wait();
            false
        }
        Err(_) => false,
    }
}

fn spawn_error(command: &HostCommand, err: std::io::Error) -> C9aiError {
    C9aiError::CommandFailed(format!("failed to start '{}': {}", command.program, err))
}
