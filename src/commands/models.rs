use crate::commands::helpers;
use crate::context::SessionContext;
use crate::error::{C9aiError, Result};
use crate::models::{self, InstallOutcome, ModelStore, CATALOG};

/// `models [list|install|remove|status] [name]`
pub fn execute(ctx: &SessionContext, action: Option<&str>, name: Option<&str>) -> Result<()> {
    let store = ctx.model_store();

    match action.unwrap_or("list") {
        "list" => list(&store),
        "install" => match name {
            Some(key) => install(&store, key),
            None => {
                println!("💡 Usage: models install <phi-3|tinyllama|llama>");
                Ok(())
            }
        },
        "remove" => match name {
            Some(key) => remove(&store, key),
            None => {
                println!("💡 Usage: models remove <name>");
                Ok(())
            }
        },
        "status" => status(&store),
        other => {
            println!("❌ Unknown models action: {}", other);
            println!("💡 Available actions: list, install, remove, status");
            Ok(())
        }
    }
}

fn list(store: &ModelStore) -> Result<()> {
    println!("🤖 Available Local AI Models:\n");
    for entry in CATALOG.iter() {
        let mark = if store.is_installed(entry.key) {
            "✅"
        } else {
            "⬜"
        };
        println!("  {} {} ({}) - {}", mark, entry.key, entry.size, entry.name);
        println!("     {}", entry.description);
    }
    println!("\n💡 Install a model with: models install <name>");
    Ok(())
}

fn install(store: &ModelStore, key: &str) -> Result<()> {
    let entry = models::catalog_entry(key)
        .ok_or_else(|| C9aiError::UnknownCatalogModel(key.to_string()))?;

    println!("📥 Installing {} ({})...", entry.name, entry.size);
    match store.install(key)? {
        InstallOutcome::AlreadyInstalled => {
            println!("✅ {} is already installed", entry.name);
        }
        InstallOutcome::Installed(path) => {
            println!("✅ {} installed to {}", entry.name, path.display());
            println!("💡 Switch to it with: switch local");
        }
    }
    Ok(())
}

fn remove(store: &ModelStore, key: &str) -> Result<()> {
    let files = store.files_for(key)?;
    if files.is_empty() {
        println!("❌ Model {} is not installed", key);
        return Ok(());
    }

    if !helpers::confirm(&format!("Remove {} model?", key), false)? {
        println!("Cancelled.");
        return Ok(());
    }

    for name in store.remove(key)? {
        println!("🗑️  Removed {}", name);
    }
    Ok(())
}

fn status(store: &ModelStore) -> Result<()> {
    println!("📊 Local AI Status:\n");

    let installed = store.installed()?;
    if installed.is_empty() {
        println!("No local models installed.");
        println!("💡 Install one with: models install phi-3");
        return Ok(());
    }

    println!("Installed models ({}):", store.dir().display());
    for model in &installed {
        let modified = model
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "  • {} ({:.1} MB, modified {})",
            model.file_name,
            model.size_mb(),
            modified
        );
    }

    if let Some(first) = installed.first() {
        println!("\nActive local model: {}", first.file_name);
    }
    Ok(())
}
