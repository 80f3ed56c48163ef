#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use c9ai::cli::{Cli, Commands};
use c9ai::commands;
use c9ai::context::SessionContext;
use c9ai::model::Model;
use c9ai::repl;

fn init_tracing(verbose: bool) {
    let default = if verbose { "c9ai=debug" } else { "c9ai=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = SessionContext::from_home()?;

    match cli.command {
        Some(Commands::Claude { prompt, autonomous }) => {
            commands::ai::execute(&ctx, Model::Claude, &prompt.join(" "), autonomous)?;
        }
        Some(Commands::Gemini { prompt, autonomous }) => {
            commands::ai::execute(&ctx, Model::Gemini, &prompt.join(" "), autonomous)?;
        }
        Some(Commands::Switch { model }) => {
            commands::switch::execute(&mut ctx, model.as_deref())?;
        }
        Some(Commands::Todos { action, args }) => {
            commands::todos::execute(&ctx, action.as_deref(), &args)?;
        }
        Some(Commands::Analytics) => commands::analytics::execute(&ctx)?,
        Some(Commands::Tools) => commands::tools::execute(&ctx)?,
        Some(Commands::Models { action, name }) => {
            commands::models::execute(&ctx, action.as_deref(), name.as_deref())?;
        }
        Some(Commands::Config) => commands::config::execute(&ctx)?,
        Some(Commands::Interactive) | None => repl::run(&mut ctx)?,
    }

    Ok(())
}
