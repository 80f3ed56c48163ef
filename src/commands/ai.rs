use crate::autonomous::AutonomousRun;
use crate::context::SessionContext;
use crate::error::{C9aiError, Result};
use crate::interaction_log;
use crate::model::Model;
use crate::session::{self, HostCommand, SessionOutcome, StdioMode};
use std::path::PathBuf;

/// Locate the model's CLI on PATH.
fn resolve_cli(model: Model) -> Result<PathBuf> {
    let binary = model
        .cli_binary()
        .ok_or_else(|| C9aiError::NoInteractiveSession(model.as_str().to_uppercase()))?;
    which::which(binary).map_err(|_| C9aiError::ToolNotInstalled(binary.to_string()))
}

pub fn cli_available(model: Model) -> bool {
    resolve_cli(model).is_ok()
}

/// Hand the terminal to the model's CLI until it exits.
pub fn start_session(model: Model, initial_prompt: Option<&str>) -> Result<SessionOutcome> {
    let binary = resolve_cli(model)?;
    let name = model.as_str().to_uppercase();

    println!(
        "\nEntering interactive session with {}. Type 'exit' or 'quit' to return.",
        name
    );

    let args: Vec<&str> = initial_prompt.into_iter().collect();
    let command = HostCommand::new(binary.to_string_lossy(), args);
    let outcome = session::run(&command, StdioMode::Inherit)?;

    println!(
        "\nReturning to c9ai shell. (Session exited with code {})",
        outcome.code_label()
    );
    Ok(outcome)
}

/// `@claude` / `@gemini`
pub fn session(model: Model) -> Result<()> {
    start_session(model, None)?;
    Ok(())
}

/// `claude <prompt>` / `gemini <prompt>`
pub fn execute(ctx: &SessionContext, model: Model, prompt: &str, autonomous: bool) -> Result<()> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        println!("⚠️  Please provide a prompt");
        return Ok(());
    }

    interaction_log::record(&ctx.paths.logs_dir(), model, prompt);

    if autonomous {
        AutonomousRun::new(ctx.max_iterations).run(model, prompt);
        return Ok(());
    }

    let name = model.as_str().to_uppercase();
    println!("\n💡 An interactive {} session has started for your prompt.", name);
    println!(
        "   Please interact with {} directly. Type 'exit' or 'quit' to return to c9ai.",
        name
    );
    start_session(model, Some(prompt))?;
    Ok(())
}
