use crate::commands::ai;
use crate::context::SessionContext;
use crate::error::Result;
use crate::model::Model;
use crate::session::{self, HostCommand};
use indicatif::ProgressBar;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether the selected model can actually be used right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Ready(String),
    Unavailable { reason: String, hint: String },
}

pub fn execute(ctx: &mut SessionContext, name: Option<&str>) -> Result<()> {
    let Some(name) = name else {
        println!("💡 Usage: switch <claude|gemini|local>");
        return Ok(());
    };

    let model: Model = name.parse()?;
    ctx.set_model(model)?;
    println!("🔄 Switched to {}", model.as_str().to_uppercase());

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Testing {} availability...", model));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let availability = check_availability(ctx, model);
    spinner.finish_and_clear();

    match availability {
        Availability::Ready(msg) => println!("✓ {}", msg),
        Availability::Unavailable { reason, hint } => {
            println!("✗ {}", reason);
            println!("💡 {}", hint);
        }
    }
    Ok(())
}

pub fn check_availability(ctx: &SessionContext, model: Model) -> Availability {
    let name = model.as_str().to_uppercase();

    if model == Model::Local {
        return match ctx.model_store().first_model() {
            Some(m) => Availability::Ready(format!("LOCAL model is ready: {}", m.file_name)),
            None => Availability::Unavailable {
                reason: "No local models installed".to_string(),
                hint: "Install a model: models install phi-3".to_string(),
            },
        };
    }

    let unavailable = || Availability::Unavailable {
        reason: format!("{} not available", name),
        hint: format!("Install {} CLI to use this model", model),
    };

    let Some(binary) = model.cli_binary() else {
        return unavailable();
    };
    if !ai::cli_available(model) {
        return unavailable();
    }

    if session::probe(&HostCommand::new(binary, ["--version"]), PROBE_TIMEOUT) {
        Availability::Ready(format!("{} is ready", name))
    } else {
        unavailable()
    }
}
