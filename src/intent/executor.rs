//! Mapping intents onto host commands.

use super::{Intent, Verb};
use crate::error::{C9aiError, Result};
use crate::platform::Platform;
use crate::session::{self, HostCommand, SessionOutcome, StdioMode};
use std::path::{Component, Path};

const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Resolve an intent to the single host command that carries it out.
///
/// Pure apart from checking that `run` targets exist under `tools_dir`.
pub fn resolve(intent: &Intent, platform: Platform, tools_dir: &Path) -> Result<HostCommand> {
    let target = intent.target.as_str();

    let command = match intent.verb {
        Verb::Open => opener(platform, target),
        Verb::Compile => {
            if !target.ends_with(".tex") {
                return Err(C9aiError::UnsupportedTarget(target.to_string()));
            }
            HostCommand::new("pdflatex", [target])
        }
        Verb::Run => {
            let script = tools_dir.join(target);
            if !is_tool_relative(target) || !script.is_file() {
                return Err(C9aiError::ScriptNotFound(target.to_string()));
            }
            let script = script.to_string_lossy().into_owned();
            match Path::new(target).extension().and_then(|e| e.to_str()) {
                Some("sh") => HostCommand::new("bash", [script]),
                Some("py") => HostCommand::new("python3", [script]),
                Some("js") => HostCommand::new("node", [script]),
                _ => HostCommand::new(script, Vec::<String>::new()),
            }
        }
        Verb::Search => {
            let url = format!("{}{}", SEARCH_URL, urlencoding::encode(target));
            opener(platform, &url)
        }
    };

    Ok(command)
}

/// `run` targets must name a path inside the tools directory.
fn is_tool_relative(target: &str) -> bool {
    let path = Path::new(target);
    !target.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// The OS file/URL opener applied to `target`.
fn opener(platform: Platform, target: &str) -> HostCommand {
    match platform {
        Platform::MacOs => HostCommand::new("open", [target]),
        // `start` treats its first quoted argument as a window title
        Platform::Windows => HostCommand::new("cmd", ["/C", "start", "", target]),
        Platform::Linux => HostCommand::new("xdg-open", [target]),
    }
}

/// Resolve and run an intent with the terminal attached.
///
/// Exactly one child process per call; no retry.
pub fn run_intent(intent: &Intent, platform: Platform, tools_dir: &Path) -> Result<SessionOutcome> {
    let command = resolve(intent, platform, tools_dir)?;
    tracing::debug!(intent = %intent, command = %command, "executing intent");
    session::run_checked(&command, StdioMode::Inherit)
}
