use crate::commands::helpers;
use crate::context::SessionContext;
use crate::error::Result;
use crate::interaction_log;

pub fn execute(ctx: &SessionContext) -> Result<()> {
    helpers::heading("📊 C9 AI Analytics Dashboard", 40);

    match interaction_log::session_days(&ctx.paths.logs_dir()) {
        Ok(days) if days > 0 => {
            println!("📈 Total sessions: {}", days);
            println!("🤖 Current model: {}", ctx.model().as_str().to_uppercase());
            println!("📅 Today: {}", chrono::Local::now().format("%Y-%m-%d"));
        }
        Ok(_) => println!("📊 No analytics data yet - start using c9ai to build insights!"),
        Err(e) => {
            tracing::debug!("could not read logs: {}", e);
            println!("📊 No analytics data yet - start using c9ai to build insights!");
        }
    }
    Ok(())
}
