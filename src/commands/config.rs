use crate::commands::helpers;
use crate::context::SessionContext;
use crate::error::Result;

pub fn execute(ctx: &SessionContext) -> Result<()> {
    helpers::heading("⚙️ C9 AI Configuration", 30);

    println!("📍 Config directory: {}", ctx.paths.root().display());
    println!(
        "🤖 Default AI model: {}",
        ctx.model().as_str().to_uppercase()
    );
    match ctx.config.last_updated {
        Some(ts) => println!(
            "🕒 Last updated: {}",
            ts.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M:%S")
        ),
        None => println!("🕒 Last updated: never"),
    }
    println!("🔧 Max iterations: {}", ctx.max_iterations);
    Ok(())
}
