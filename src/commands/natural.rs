use crate::context::SessionContext;
use crate::error::Result;
use crate::interpret::{self, ShellIntent};
use crate::session::{self, StdioMode};

/// Interpret free text against the keyword rules and run the match.
pub fn execute(ctx: &SessionContext, input: &str) -> Result<()> {
    let input = input.trim();
    println!("🤖 Processing: \"{}\"", input);

    let cwd = std::env::current_dir()?;
    match interpret::interpret(input, &cwd) {
        Some(intent) => run_intent(ctx, &intent),
        None => {
            match interpret::suggest(input) {
                Some(suggestion) => println!("💡 Did you mean: {}", suggestion),
                None => {
                    let first = input.split_whitespace().next().unwrap_or(input);
                    println!("❌ Unknown command: \"{}\"", first);
                    println!("💡 Type 'help' to see available commands");
                }
            }
            Ok(())
        }
    }
}

fn run_intent(ctx: &SessionContext, intent: &ShellIntent) -> Result<()> {
    let command = intent.host_command(ctx.platform);
    tracing::debug!(intent = intent.name(), "natural language match");
    println!("🔧 Executing: {}", intent.command_line(ctx.platform));

    let outcome = session::run(&command, StdioMode::Capture)?;
    if outcome.success() {
        if let Some(out) = outcome.stdout.filter(|s| !s.is_empty()) {
            println!("{}", out);
        }
    } else {
        let code = outcome.code_label();
        let detail = outcome
            .stderr
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("exit code {}", code));
        println!("❌ Command failed: {}", detail);
    }
    Ok(())
}
